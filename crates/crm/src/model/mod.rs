//! Pure data structures (DTOs) implementing the [`Record`](record_store::Record) trait.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
