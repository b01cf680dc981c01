use std::collections::HashMap;

use tracing::debug;

use crate::core::Result;
use crate::modules::sales::models::{DateRange, Sale, SaleDetail};
use crate::modules::sales::repositories::SaleRepository;

/// Deferred query for the non-voided sales of a date range
///
/// Building it performs no I/O. Each call to [`SalesInRange::fetch`] runs the
/// query again, so one value can be consumed any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesInRange {
    range: Option<DateRange>,
}

impl SalesInRange {
    /// Query over `range`
    pub fn between(range: DateRange) -> Self {
        Self { range: Some(range) }
    }

    /// Query that always yields no sales and never touches storage
    pub fn none() -> Self {
        Self { range: None }
    }

    pub fn range(&self) -> Option<&DateRange> {
        self.range.as_ref()
    }

    pub fn is_none(&self) -> bool {
        self.range.is_none()
    }

    /// Execute against `repo`, returning sales with their line items attached
    pub async fn fetch(&self, repo: &dyn SaleRepository) -> Result<Vec<Sale>> {
        let Some(range) = self.range else {
            return Ok(Vec::new());
        };

        let mut sales = repo
            .active_sales_between(range.start_utc(), range.end_utc())
            .await?;

        if sales.is_empty() {
            debug!(start = %range.start(), end = %range.end(), "No sales in range");
            return Ok(sales);
        }

        let sale_ids: Vec<i64> = sales.iter().map(|sale| sale.id).collect();
        let details = repo.details_with_subtotal(&sale_ids).await?;

        debug!(
            sales = sales.len(),
            details = details.len(),
            start = %range.start(),
            end = %range.end(),
            "Loaded sales with line items"
        );

        let mut by_sale: HashMap<i64, Vec<SaleDetail>> = HashMap::new();
        for detail in details {
            by_sale.entry(detail.sale_id).or_default().push(detail);
        }

        for sale in &mut sales {
            sale.details = by_sale.remove(&sale.id).unwrap_or_default();
        }

        Ok(sales)
    }
}
