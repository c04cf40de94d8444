//! # Filter Engine
//!
//! Typed, per-entity filters for collection scans. Every field is optional:
//! absent fields apply no restriction and present fields are ANDed together.
//! String fields match by case-insensitive substring and numeric or date
//! bounds are inclusive on both ends.
//!
//! Filtering never mutates and never fails. A filter that matches nothing
//! returns an empty list; an empty filter returns the whole collection.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;

/// Case-insensitive substring match.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
