//! Products domain module.
//!
//! This crate contains business rules for a single catalog product: its stock
//! level, the active flag, and the purchase primitive. Pure domain logic (no
//! IO, no storage).

pub mod product;

pub use product::Product;
pub use shopfront_core::ProductId;
