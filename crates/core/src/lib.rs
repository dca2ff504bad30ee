//! Medibay Core - Shared types library.
//!
//! This crate provides common types used across all Medibay components:
//! - `cart` - Shopping cart state store
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product references, display snapshots, and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
