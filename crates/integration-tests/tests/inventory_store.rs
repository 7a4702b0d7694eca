//! Integration tests for the inventory store, driven through the
//! application aggregate against real files.

use rust_decimal::Decimal;
use stockroom_backend::{InventoryError, Product};
use stockroom_core::{Price, ProductId};

use stockroom_integration_tests::TestApp;

fn product(id: i32, name: &str, category: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        product_id: ProductId::new(id),
        name: name.to_owned(),
        category: category.to_owned(),
        price: Price::new(Decimal::new(price_cents, 2)).expect("non-negative price"),
        stock_quantity: stock,
    }
}

// ============================================================================
// Add / remove / list
// ============================================================================

#[test]
fn test_add_rejects_duplicate_id() {
    let mut harness = TestApp::new();
    let inventory = harness.app.inventory_mut();

    inventory
        .add_product(product(1, "Drill", "Tools", 12999, 4))
        .expect("first add");
    let err = inventory
        .add_product(product(1, "Other Drill", "Tools", 9999, 2))
        .expect_err("duplicate id must fail");
    assert!(matches!(err, InventoryError::DuplicateProductId(_)));
    assert_eq!(inventory.len(), 1);
}

#[test]
fn test_remove_then_list_excludes_id() {
    let mut harness = TestApp::new();
    let inventory = harness.app.inventory_mut();

    inventory
        .add_product(product(1, "Drill", "Tools", 12999, 4))
        .expect("add");
    inventory
        .add_product(product(2, "Glue", "Supplies", 499, 20))
        .expect("add");

    assert!(inventory.remove_product(ProductId::new(1)).expect("remove"));
    assert!(
        !inventory
            .products()
            .iter()
            .any(|p| p.product_id == ProductId::new(1))
    );
    assert_eq!(inventory.product_ids(), vec![ProductId::new(2)]);
}

#[test]
fn test_remove_absent_id_is_noop_not_error() {
    let mut harness = TestApp::new();
    let inventory = harness.app.inventory_mut();

    inventory
        .add_product(product(1, "Drill", "Tools", 12999, 4))
        .expect("add");

    let removed = inventory
        .remove_product(ProductId::new(404))
        .expect("absent remove is not an error");
    assert!(!removed);
    assert_eq!(inventory.len(), 1);
}

// ============================================================================
// Stock adjustment
// ============================================================================

#[test]
fn test_adjust_below_zero_fails_and_leaves_stock() {
    let mut harness = TestApp::new();
    let inventory = harness.app.inventory_mut();

    inventory
        .add_product(product(1, "Drill", "Tools", 12999, 4))
        .expect("add");

    let err = inventory
        .adjust_stock(ProductId::new(1), -5)
        .expect_err("floor violation must fail");
    assert!(matches!(
        err,
        InventoryError::InsufficientStock {
            available: 4,
            delta: -5
        }
    ));

    // Unchanged in memory and on disk.
    assert_eq!(
        inventory.get(ProductId::new(1)).expect("product").stock_quantity,
        4
    );
    harness.reopen();
    assert_eq!(
        harness
            .app
            .inventory()
            .get(ProductId::new(1))
            .expect("product after reload")
            .stock_quantity,
        4
    );
}

#[test]
fn test_adjust_persists_through_reload() {
    let mut harness = TestApp::new();
    harness
        .app
        .inventory_mut()
        .add_product(product(1, "Drill", "Tools", 12999, 4))
        .expect("add");

    let new_stock = harness
        .app
        .inventory_mut()
        .adjust_stock(ProductId::new(1), 6)
        .expect("adjust");
    assert_eq!(new_stock, 10);

    harness.reopen();
    assert_eq!(
        harness
            .app
            .inventory()
            .get(ProductId::new(1))
            .expect("product after reload")
            .stock_quantity,
        10
    );
}

#[test]
fn test_adjust_to_exact_zero_is_allowed() {
    let mut harness = TestApp::new();
    let inventory = harness.app.inventory_mut();

    inventory
        .add_product(product(1, "Drill", "Tools", 12999, 4))
        .expect("add");
    assert_eq!(
        inventory.adjust_stock(ProductId::new(1), -4).expect("adjust"),
        0
    );
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_matches_name_or_category() {
    let mut harness = TestApp::new();
    let inventory = harness.app.inventory_mut();

    inventory
        .add_product(product(1, "Cordless Drill", "Power Tools", 12999, 4))
        .expect("add");
    inventory
        .add_product(product(2, "Wood Glue", "Supplies", 499, 20))
        .expect("add");
    inventory
        .add_product(product(3, "Drill Bits", "Accessories", 1999, 12))
        .expect("add");

    let ids: Vec<_> = inventory
        .search("DRILL")
        .into_iter()
        .map(|p| p.product_id)
        .collect();
    assert_eq!(ids, vec![ProductId::new(1), ProductId::new(3)]);

    let ids: Vec<_> = inventory
        .search("supplies")
        .into_iter()
        .map(|p| p.product_id)
        .collect();
    assert_eq!(ids, vec![ProductId::new(2)]);

    assert_eq!(inventory.search("").len(), 3);
}
