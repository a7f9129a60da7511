//! `shopfront-cli` — interactive text menu over a single in-memory store.
//!
//! The shell owns one [`shopfront_store::Store`] and lends it to each menu
//! action; all parsing and printing stays here, the store only ever sees
//! structured order lines.

pub mod config;
pub mod menu;

pub use config::{CatalogEntry, ShellConfig};
pub use menu::run;
