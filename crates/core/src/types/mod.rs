//! Core types for Medibay.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod product;
pub mod product_ref;

pub use product::{LineItem, ProductSnapshot};
pub use product_ref::{ProductRef, ProductRefError};
