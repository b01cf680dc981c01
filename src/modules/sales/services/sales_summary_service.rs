use std::sync::Arc;

use chrono_tz::Tz;
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::reports::models::SalesReport;
use crate::modules::sales::models::{DateInput, DateRange, Sale};
use crate::modules::sales::repositories::SaleRepository;
use crate::modules::sales::services::SalesInRange;

/// Service answering "which sales happened between these dates"
pub struct SalesSummaryService {
    sale_repo: Arc<dyn SaleRepository>,
    time_zone: Tz,
}

impl SalesSummaryService {
    /// Create a new service
    ///
    /// `time_zone` is applied to date-only bounds and naive timestamps.
    pub fn new(sale_repo: Arc<dyn SaleRepository>, time_zone: Tz) -> Self {
        Self {
            sale_repo,
            time_zone,
        }
    }

    /// Build the query for non-voided sales between `date_start` and `date_end`
    ///
    /// Accepts `YYYY-MM-DD` text, dates or timestamps. A date-only start
    /// covers that day from midnight, a date-only end covers it through
    /// 23:59:59.999999. Malformed or missing input produces an empty query
    /// rather than an error.
    pub fn sales_in_range(
        &self,
        date_start: impl Into<DateInput>,
        date_end: impl Into<DateInput>,
    ) -> SalesInRange {
        let date_start = date_start.into();
        let date_end = date_end.into();

        match DateRange::normalize(&date_start, &date_end, &self.time_zone) {
            Some(range) => SalesInRange::between(range),
            None => {
                warn!(
                    date_start = ?date_start,
                    date_end = ?date_end,
                    "Unusable date range, returning no sales"
                );
                SalesInRange::none()
            }
        }
    }

    /// Execute a previously built query
    pub async fn fetch(&self, query: &SalesInRange) -> Result<Vec<Sale>> {
        query.fetch(self.sale_repo.as_ref()).await
    }

    /// Sales in range with line items, aggregated into a report
    pub async fn detail_summary(
        &self,
        date_start: impl Into<DateInput>,
        date_end: impl Into<DateInput>,
    ) -> Result<SalesReport> {
        let query = self.sales_in_range(date_start, date_end);
        let sales = self.fetch(&query).await?;
        let report = SalesReport::new(query.range().copied(), sales);

        info!(
            sales = report.sale_count,
            details = report.detail_count,
            total = %report.total_subtotal,
            "Sales summary generated"
        );

        Ok(report)
    }
}
