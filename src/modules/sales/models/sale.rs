use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::SaleDetail;

/// A completed point-of-sale transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i64,

    /// Moment the sale was registered (stored as UTC)
    pub date_sale: DateTime<Utc>,

    /// Amount charged for the whole sale
    pub amount: Decimal,

    /// Number of units sold across all line items
    pub count: i32,

    pub invoice_type: String,
    pub payment_type: String,

    /// Included in a cash register closing
    pub closed: bool,

    /// Cancelled sales are excluded from reporting
    pub voided: bool,

    /// Line items, populated only when prefetched
    #[sqlx(skip)]
    #[serde(default)]
    pub details: Vec<SaleDetail>,
}

impl Sale {
    /// Sum of the line-item subtotals
    pub fn details_total(&self) -> Decimal {
        self.details.iter().map(SaleDetail::subtotal).sum()
    }

    /// Whether `date_sale` falls in `[start, end]`
    pub fn is_within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start <= self.date_sale && self.date_sale <= end
    }
}
