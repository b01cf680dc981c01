// Test Data Factory
//
// Builds sales and line items around 2025-08-25 (UTC) with sales placed
// exactly on the day boundaries.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use market::sales::{InMemorySaleRepository, Sale, SaleDetail};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Test data factory for sales fixtures
pub struct TestDataFactory;

impl TestDataFactory {
    /// UTC timestamp with microseconds
    pub fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32, micro: u32) -> DateTime<Utc> {
        let naive = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_micro_opt(h, mi, s, micro)
            .unwrap();
        Utc.from_utc_datetime(&naive)
    }

    pub fn sale(id: i64, date_sale: DateTime<Utc>, voided: bool) -> Sale {
        Sale {
            id,
            date_sale,
            amount: dec!(0),
            count: 0,
            invoice_type: "BOLETA".to_string(),
            payment_type: "CASH".to_string(),
            closed: false,
            voided,
            details: Vec::new(),
        }
    }

    pub fn detail(id: i64, sale_id: i64, count: i32, price_sale: Decimal) -> SaleDetail {
        SaleDetail {
            id,
            sale_id,
            product_id: 100 + id,
            count,
            price_purchase: dec!(1.00),
            price_sale,
            voided: false,
            subtotal: None,
        }
    }

    /// Sales around 2025-08-25:
    ///
    /// | id | date_sale (UTC)              | voided |
    /// |----|------------------------------|--------|
    /// | 1  | 2025-08-25 00:00:00.000000   | no     |
    /// | 2  | 2025-08-25 23:59:59.999999   | no     |
    /// | 3  | 2025-08-25 12:00:00          | yes    |
    /// | 4  | 2025-08-24 23:59:59.999999   | no     |
    /// | 5  | 2025-08-26 00:00:00          | no     |
    pub fn boundary_sales() -> (Vec<Sale>, Vec<SaleDetail>) {
        let sales = vec![
            Self::sale(1, Self::utc(2025, 8, 25, 0, 0, 0, 0), false),
            Self::sale(2, Self::utc(2025, 8, 25, 23, 59, 59, 999_999), false),
            Self::sale(3, Self::utc(2025, 8, 25, 12, 0, 0, 0), true),
            Self::sale(4, Self::utc(2025, 8, 24, 23, 59, 59, 999_999), false),
            Self::sale(5, Self::utc(2025, 8, 26, 0, 0, 0, 0), false),
        ];

        let details = vec![
            Self::detail(11, 1, 2, dec!(3.50)),
            Self::detail(12, 1, 1, dec!(5.00)),
            Self::detail(21, 2, 3, dec!(1.40)),
            Self::detail(31, 3, 1, dec!(9.99)),
            Self::detail(41, 4, 4, dec!(2.00)),
            Self::detail(51, 5, 2, dec!(0.75)),
        ];

        (sales, details)
    }

    pub fn boundary_repository() -> InMemorySaleRepository {
        let (sales, details) = Self::boundary_sales();
        InMemorySaleRepository::with_data(sales, details)
    }
}
