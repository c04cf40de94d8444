//! # CRM Backend Library
//!
//! Exposes the core modules of the CRM backend for integration testing
//! and embedding. See the binary entry point for a full walkthrough.

pub mod clients;
pub mod customer_actor;
pub mod filters;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod seed;
