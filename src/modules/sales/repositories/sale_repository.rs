// Read access to sales and their line items.
//
// Sales are selected by the non-voided + date window rule, and line items are
// loaded with a `subtotal` column computed by the database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::core::Result;
use crate::modules::sales::models::{Sale, SaleDetail};

/// Source of sales records for reporting
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Non-voided sales with `date_sale` in `[start, end]`, oldest first
    async fn active_sales_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Sale>>;

    /// Line items of the given sales, each annotated with its subtotal
    async fn details_with_subtotal(&self, sale_ids: &[i64]) -> Result<Vec<SaleDetail>>;
}

/// MySQL-backed sale repository
pub struct MySqlSaleRepository {
    pool: MySqlPool,
}

impl MySqlSaleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for MySqlSaleRepository {
    async fn active_sales_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT
                id, date_sale, amount, count, invoice_type, payment_type, closed, voided
            FROM sales
            WHERE voided = FALSE
              AND date_sale BETWEEN ? AND ?
            ORDER BY date_sale, id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    async fn details_with_subtotal(&self, sale_ids: &[i64]) -> Result<Vec<SaleDetail>> {
        if sale_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<MySql>::new(
            r#"
            SELECT
                id, sale_id, product_id, count, price_purchase, price_sale, voided,
                price_sale * count AS subtotal
            FROM sale_details
            WHERE sale_id IN ("#,
        );

        let mut ids = query.separated(", ");
        for id in sale_ids {
            ids.push_bind(*id);
        }
        ids.push_unseparated(") ORDER BY sale_id, id");

        let details = query
            .build_query_as::<SaleDetail>()
            .fetch_all(&self.pool)
            .await?;

        Ok(details)
    }
}
