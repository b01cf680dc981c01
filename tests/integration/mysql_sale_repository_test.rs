//! MySQL repository tests
//!
//! Require a running MySQL instance (TEST_DATABASE_URL). Run with:
//!   cargo test --test mysql_sale_repository_test -- --ignored

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use chrono_tz::Tz;
use helpers::{create_test_pool, delete_sales, seed_detail, seed_sale, TestDataFactory};
use market::sales::{MySqlSaleRepository, SaleRepository, SalesSummaryService};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Keeps seeded ids clear of rows created by other tests
const ID_OFFSET: i64 = 9_000_000;

#[tokio::test]
#[ignore] // Requires test database
async fn test_mysql_sales_in_range_with_subtotals() {
    let pool = create_test_pool().await;
    let (sales, details) = TestDataFactory::boundary_sales();

    let sale_ids: Vec<i64> = sales.iter().map(|s| s.id + ID_OFFSET).collect();
    delete_sales(&pool, &sale_ids).await;

    for mut sale in sales {
        sale.id += ID_OFFSET;
        seed_sale(&pool, &sale).await;
    }
    for mut detail in details {
        detail.id += ID_OFFSET;
        detail.sale_id += ID_OFFSET;
        seed_detail(&pool, &detail).await;
    }

    let repo = Arc::new(MySqlSaleRepository::new(pool.clone()));
    let service = SalesSummaryService::new(repo.clone(), Tz::UTC);

    let query = service.sales_in_range("2025-08-25", "2025-08-25");
    let found = service.fetch(&query).await.unwrap();
    let found: Vec<_> = found
        .into_iter()
        .filter(|s| sale_ids.contains(&s.id))
        .collect();

    assert_eq!(
        found.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![1 + ID_OFFSET, 2 + ID_OFFSET]
    );
    assert_eq!(found[0].details.len(), 2);
    assert_eq!(found[0].details[0].subtotal, Some(dec!(7.00)));
    assert_eq!(found[1].details[0].subtotal, Some(dec!(4.20)));

    let details = repo.details_with_subtotal(&[3 + ID_OFFSET]).await.unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(
        details[0].subtotal,
        Some(details[0].price_sale * Decimal::from(details[0].count))
    );

    delete_sales(&pool, &sale_ids).await;
}

#[tokio::test]
#[ignore] // Requires test database
async fn test_mysql_details_for_no_sales() {
    let pool = create_test_pool().await;
    let repo = MySqlSaleRepository::new(pool);

    assert!(repo.details_with_subtotal(&[]).await.unwrap().is_empty());
}
