//! Integration tests for Medibay.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p medibay-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_operations` - Cart mutation semantics, derived values, and
//!   acknowledgments
//! - `cart_persistence` - Durable slot behavior: round-trips, hydration,
//!   and failure continuity
