use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::sales::models::{DateRange, Sale};

/// Sales of a period with their line items and aggregated totals
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
    /// Start of the period (inclusive), absent when the input was unusable
    pub period_start: Option<DateTime<FixedOffset>>,
    /// End of the period (inclusive), absent when the input was unusable
    pub period_end: Option<DateTime<FixedOffset>>,
    pub sales: Vec<Sale>,
    pub sale_count: usize,
    /// Number of line items across all sales
    pub detail_count: usize,
    /// Sum of the line-item subtotals
    pub total_subtotal: Decimal,
    /// Sum of the amounts recorded on the sales themselves
    pub total_amount: Decimal,
}

impl SalesReport {
    pub fn new(range: Option<DateRange>, sales: Vec<Sale>) -> Self {
        let detail_count = sales.iter().map(|sale| sale.details.len()).sum();
        let total_subtotal = sales.iter().map(Sale::details_total).sum();
        let total_amount = sales.iter().map(|sale| sale.amount).sum();

        Self {
            period_start: range.map(|r| r.start().fixed_offset()),
            period_end: range.map(|r| r.end().fixed_offset()),
            sale_count: sales.len(),
            detail_count,
            total_subtotal,
            total_amount,
            sales,
        }
    }

    /// Report for unusable input
    pub fn empty() -> Self {
        Self::new(None, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
