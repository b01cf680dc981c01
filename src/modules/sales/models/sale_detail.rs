// Line item of a sale. `subtotal` is computed at read time and never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One product/quantity/price entry belonging to a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SaleDetail {
    pub id: i64,

    /// Foreign key to the owning sale
    pub sale_id: i64,

    pub product_id: i64,

    /// Quantity sold
    pub count: i32,

    /// Cost of the product at the time of sale
    pub price_purchase: Decimal,

    /// Unit price charged to the customer
    pub price_sale: Decimal,

    pub voided: bool,

    /// price_sale × count, present only when loaded with the annotation
    #[sqlx(default)]
    #[serde(default)]
    pub subtotal: Option<Decimal>,
}

impl SaleDetail {
    /// Unit price times quantity, without rounding
    pub fn compute_subtotal(&self) -> Decimal {
        self.price_sale * Decimal::from(self.count)
    }

    /// Return this line item annotated with its subtotal
    pub fn with_subtotal(mut self) -> Self {
        self.subtotal = Some(self.compute_subtotal());
        self
    }

    /// Annotated subtotal, falling back to computing it
    pub fn subtotal(&self) -> Decimal {
        self.subtotal.unwrap_or_else(|| self.compute_subtotal())
    }
}
