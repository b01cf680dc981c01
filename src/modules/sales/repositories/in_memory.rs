use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::SaleRepository;
use crate::core::Result;
use crate::modules::sales::models::{Sale, SaleDetail};

/// Sale repository kept in process memory
///
/// Applies the same selection rules as the MySQL repository. Useful for
/// tests and local runs without a database.
#[derive(Default)]
pub struct InMemorySaleRepository {
    sales: RwLock<Vec<Sale>>,
    details: RwLock<Vec<SaleDetail>>,
    queries: AtomicUsize,
}

impl InMemorySaleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository seeded with sales and line items
    pub fn with_data(sales: Vec<Sale>, details: Vec<SaleDetail>) -> Self {
        Self {
            sales: RwLock::new(sales),
            details: RwLock::new(details),
            queries: AtomicUsize::new(0),
        }
    }

    pub async fn insert_sale(&self, sale: Sale) {
        self.sales.write().await.push(sale);
    }

    /// Number of queries executed so far
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SaleRepository for InMemorySaleRepository {
    async fn active_sales_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Sale>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let mut sales: Vec<Sale> = self
            .sales
            .read()
            .await
            .iter()
            .filter(|sale| !sale.voided && sale.is_within(start, end))
            .map(|sale| Sale {
                details: Vec::new(),
                ..sale.clone()
            })
            .collect();
        sales.sort_by_key(|sale| (sale.date_sale, sale.id));

        Ok(sales)
    }

    async fn details_with_subtotal(&self, sale_ids: &[i64]) -> Result<Vec<SaleDetail>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let mut details: Vec<SaleDetail> = self
            .details
            .read()
            .await
            .iter()
            .filter(|detail| sale_ids.contains(&detail.sale_id))
            .cloned()
            .map(SaleDetail::with_subtotal)
            .collect();
        details.sort_by_key(|detail| (detail.sale_id, detail.id));

        Ok(details)
    }
}
