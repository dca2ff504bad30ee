//! Medibay Cart - Shopping cart state store.
//!
//! An in-memory cart for one shopping session, durably mirrored into a
//! key-value slot on every mutation. The store owns the authoritative
//! line-item list, the slot keeps it across sessions, and an injectable
//! [`Notifier`] carries the brief user-visible acknowledgments mutations
//! produce.
//!
//! # Example
//!
//! ```
//! use medibay_cart::{CartStore, MemorySlot, TracingNotifier};
//! use medibay_core::{ProductRef, ProductSnapshot};
//! use rust_decimal::Decimal;
//!
//! let snapshot = ProductSnapshot {
//!     product_ref: ProductRef::parse("ibuprofen-400").unwrap(),
//!     name: "Ibuprofen 400mg".to_string(),
//!     unit_price: Decimal::from(120),
//!     image_url: None,
//! };
//!
//! let mut cart = CartStore::open(MemorySlot::new(), TracingNotifier);
//! cart.add_to_cart(snapshot, 2).unwrap();
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total_price(), Decimal::from(240));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod notify;
pub mod slot;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use error::{CartError, SlotError};
pub use notify::{NoticeLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use slot::{CartSlot, JsonFileSlot, MemorySlot};
pub use store::CartStore;
