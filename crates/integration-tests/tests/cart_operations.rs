//! Integration tests for cart mutation semantics.
//!
//! These tests exercise the full store API the way UI collaborators use it:
//! add/remove/update/clear driven in sequence, with derived values and
//! acknowledgments checked after each step.

#![allow(clippy::unwrap_used)]

use medibay_cart::{CartStore, MemorySlot, NoticeLevel, RecordingNotifier, TracingNotifier};
use medibay_core::{ProductRef, ProductSnapshot};
use rust_decimal::Decimal;

fn snapshot(product_ref: &str, unit_price: i64) -> ProductSnapshot {
    ProductSnapshot {
        product_ref: ProductRef::parse(product_ref).unwrap(),
        name: format!("Product {product_ref}"),
        unit_price: Decimal::from(unit_price),
        image_url: Some(format!("https://cdn.medibay.example/{product_ref}.jpg")),
    }
}

fn empty_cart() -> CartStore<MemorySlot, RecordingNotifier> {
    CartStore::open(MemorySlot::new(), RecordingNotifier::new())
}

// =============================================================================
// Uniqueness and Quantity Semantics
// =============================================================================

#[test]
fn test_add_to_empty_cart() {
    let mut cart = empty_cart();
    cart.add_to_cart(snapshot("P1", 100), 2).unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_price(), Decimal::from(200));
}

#[test]
fn test_repeated_adds_merge_into_one_line() {
    let mut cart = empty_cart();
    cart.add_to_cart(snapshot("P1", 100), 2).unwrap();
    cart.add_to_cart(snapshot("P1", 100), 3).unwrap();

    // One row, quantity summed
    assert_eq!(cart.len(), 1);
    let line = cart.get(&ProductRef::parse("P1").unwrap()).unwrap();
    assert_eq!(line.quantity, 5);
    assert_eq!(cart.total_price(), Decimal::from(500));
}

#[test]
fn test_quantity_is_sum_of_all_adds() {
    let mut cart = empty_cart();
    for quantity in [1, 4, 2, 8] {
        cart.add_to_cart(snapshot("P1", 10), quantity).unwrap();
    }

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.item_count(), 15);
}

#[test]
fn test_update_to_zero_removes_line() {
    let mut cart = empty_cart();
    cart.add_to_cart(snapshot("P1", 100), 5).unwrap();

    cart.update_quantity(&ProductRef::parse("P1").unwrap(), 0);
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn test_removal_is_idempotent() {
    let mut cart = empty_cart();
    cart.add_to_cart(snapshot("P1", 100), 1).unwrap();

    let p1 = ProductRef::parse("P1").unwrap();
    cart.remove_from_cart(&p1);
    cart.remove_from_cart(&p1);

    assert!(cart.is_empty());
    // Exactly one removal acknowledgment: the second call was a no-op
    assert_eq!(cart.notifier().messages_at(NoticeLevel::Info).len(), 1);
}

#[test]
fn test_add_zero_quantity_is_rejected() {
    let mut cart = empty_cart();
    assert!(cart.add_to_cart(snapshot("P1", 100), 0).is_err());

    assert!(cart.is_empty());
    assert!(cart.slot().payload().is_none());
    assert!(cart.notifier().notices().is_empty());
}

// =============================================================================
// Derived Values
// =============================================================================

#[test]
fn test_totals_across_multiple_lines() {
    let mut cart = empty_cart();
    cart.add_to_cart(snapshot("P1", 100), 2).unwrap();
    cart.add_to_cart(snapshot("P2", 35), 3).unwrap();
    cart.add_to_cart(snapshot("P3", 7), 1).unwrap();

    // 2*100 + 3*35 + 1*7
    assert_eq!(cart.total_price(), Decimal::from(312));
    assert_eq!(cart.item_count(), 6);
}

#[test]
fn test_totals_with_fractional_prices() {
    let mut cart = empty_cart();
    let mut aspirin = snapshot("P1", 0);
    aspirin.unit_price = "4.99".parse().unwrap();
    cart.add_to_cart(aspirin, 3).unwrap();

    assert_eq!(cart.total_price(), "14.97".parse::<Decimal>().unwrap());
}

#[test]
fn test_clear_cart_resets_everything() {
    let mut cart = empty_cart();
    cart.add_to_cart(snapshot("P1", 100), 1).unwrap();
    cart.add_to_cart(snapshot("P2", 50), 1).unwrap();

    cart.clear_cart();

    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total_price(), Decimal::ZERO);
    assert!(cart.slot().payload().is_none());
}

// =============================================================================
// Display Flag
// =============================================================================

#[test]
fn test_toggle_cart_is_display_only() {
    let mut cart = empty_cart();
    assert!(!cart.is_open());

    cart.toggle_cart();
    assert!(cart.is_open());

    // Toggling never writes to the slot
    assert!(cart.slot().payload().is_none());
}

// =============================================================================
// Acknowledgments
// =============================================================================

#[test]
fn test_mutation_acknowledgments() {
    let mut cart = empty_cart();
    cart.add_to_cart(snapshot("P1", 100), 1).unwrap();
    cart.remove_from_cart(&ProductRef::parse("P1").unwrap());
    cart.clear_cart();

    let success = cart.notifier().messages_at(NoticeLevel::Success);
    assert_eq!(success, vec!["Product P1 added to cart".to_string()]);

    let info = cart.notifier().messages_at(NoticeLevel::Info);
    assert_eq!(
        info,
        vec![
            "Product P1 removed from cart".to_string(),
            "Cart cleared".to_string()
        ]
    );
}

#[test]
fn test_plain_quantity_update_emits_no_acknowledgment() {
    let mut cart = empty_cart();
    cart.add_to_cart(snapshot("P1", 100), 1).unwrap();
    let before = cart.notifier().notices().len();

    cart.update_quantity(&ProductRef::parse("P1").unwrap(), 4);
    assert_eq!(cart.notifier().notices().len(), before);
}

#[test]
fn test_tracing_notifier_smoke() {
    // The default notifier routes acknowledgments through tracing; make sure
    // the full path runs under a real subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter("medibay_cart=debug")
        .with_test_writer()
        .try_init();

    let mut cart = CartStore::open(MemorySlot::new(), TracingNotifier);
    cart.add_to_cart(snapshot("P1", 100), 1).unwrap();
    cart.clear_cart();

    assert!(cart.is_empty());
}
