//! Product display snapshot and cart line item.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::product_ref::ProductRef;

/// Denormalized product fields captured when an item is added to the cart.
///
/// Carries everything the cart needs for display, so consumers never
/// re-fetch the catalog to render a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Stable catalog reference for this product.
    pub product_ref: ProductRef,
    /// Display name.
    pub name: String,
    /// Unit price at capture time.
    pub unit_price: Decimal,
    /// Display image, if the product has one.
    pub image_url: Option<String>,
}

/// One cart line: a product snapshot and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product fields captured at add-time.
    pub snapshot: ProductSnapshot,
    /// Number of units, always at least 1.
    pub quantity: u32,
    /// When this line was first created.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Create a new line item, stamping the creation time.
    #[must_use]
    pub fn new(snapshot: ProductSnapshot, quantity: u32) -> Self {
        Self {
            snapshot,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Stable catalog reference of the product on this line.
    #[must_use]
    pub fn product_ref(&self) -> &ProductRef {
        &self.snapshot.product_ref
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.snapshot.unit_price * Decimal::from(self.quantity)
    }
}
