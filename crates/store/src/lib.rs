//! Store domain module.
//!
//! A store owns an ordered catalog of products and processes multi-line
//! orders against it. Pure domain logic (no IO, no storage).

pub mod order;
pub mod store;

pub use order::OrderLine;
pub use store::Store;
