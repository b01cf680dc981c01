// Property-based tests for line item subtotals
//
// Properties tested:
// 1. subtotal = price_sale × count, exactly
// 2. line items loaded through the repository always carry that subtotal

use market::sales::{InMemorySaleRepository, SaleDetail, SaleRepository};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn detail(id: i64, sale_id: i64, count: i32, price_sale: Decimal) -> SaleDetail {
    SaleDetail {
        id,
        sale_id,
        product_id: 1,
        count,
        price_purchase: Decimal::ZERO,
        price_sale,
        voided: false,
        subtotal: None,
    }
}

proptest! {
    /// Property: subtotal equals unit price times quantity
    #[test]
    fn test_subtotal_is_price_times_count(
        count in 0i32..=10_000,
        price_cents in 0i64..=10_000_000,
    ) {
        let price = Decimal::new(price_cents, 2);
        let item = detail(1, 1, count, price).with_subtotal();

        prop_assert_eq!(item.subtotal, Some(price * Decimal::from(count)));
        prop_assert_eq!(item.subtotal(), item.compute_subtotal());
    }

    /// Property: the repository annotates every returned line item
    #[test]
    fn test_repository_annotates_subtotals(
        items in prop::collection::vec((1i32..=50, 0i64..=100_000, 1i64..=3), 1..20),
    ) {
        let details: Vec<SaleDetail> = items
            .iter()
            .enumerate()
            .map(|(i, (count, cents, sale_id))| {
                detail(i as i64 + 1, *sale_id, *count, Decimal::new(*cents, 2))
            })
            .collect();
        let repo = InMemorySaleRepository::with_data(Vec::new(), details.clone());

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let loaded = runtime.block_on(repo.details_with_subtotal(&[1, 2, 3])).unwrap();

        prop_assert_eq!(loaded.len(), details.len());
        for item in &loaded {
            prop_assert_eq!(
                item.subtotal,
                Some(item.price_sale * Decimal::from(item.count))
            );
        }
    }
}

#[tokio::test]
async fn test_repository_only_returns_requested_sales() {
    let repo = InMemorySaleRepository::with_data(
        Vec::new(),
        vec![
            detail(1, 1, 1, Decimal::ONE),
            detail(2, 2, 1, Decimal::ONE),
            detail(3, 3, 1, Decimal::ONE),
        ],
    );

    let loaded = repo.details_with_subtotal(&[1, 3]).await.unwrap();
    let ids: Vec<i64> = loaded.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
