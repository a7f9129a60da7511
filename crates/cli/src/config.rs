//! Shell configuration, read from the environment.
//!
//! - `SHOPFRONT_STORE_NAME`: name shown in the menu banner.
//! - `SHOPFRONT_CATALOG`: path to a JSON array of `{name, price, quantity}`
//!   entries seeding the store. Without it the built-in catalog is used.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use shopfront_products::Product;
use shopfront_store::Store;

pub const STORE_NAME_VAR: &str = "SHOPFRONT_STORE_NAME";
pub const CATALOG_VAR: &str = "SHOPFRONT_CATALOG";
pub const DEFAULT_STORE_NAME: &str = "Best Buy";

/// One product in a catalog file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub store_name: String,
    pub catalog: Vec<CatalogEntry>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            catalog: default_catalog(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store_name = lookup(STORE_NAME_VAR)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        let catalog = match lookup(CATALOG_VAR) {
            Some(path) => load_catalog(Path::new(&path))?,
            None => {
                tracing::info!("{CATALOG_VAR} not set; using built-in catalog");
                default_catalog()
            }
        };

        Ok(Self {
            store_name,
            catalog,
        })
    }

    /// Validate every catalog entry and build the store from them.
    pub fn build_store(&self) -> Result<Store> {
        let products = self
            .catalog
            .iter()
            .map(|entry| {
                Product::new(entry.name.as_str(), entry.price, entry.quantity)
                    .with_context(|| format!("invalid catalog entry {:?}", entry.name))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Store::new(products))
    }
}

pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("MacBook Air M2", 1450.0, 100),
        CatalogEntry::new("Bose QuietComfort Earbuds", 250.0, 500),
        CatalogEntry::new("Google Pixel 7", 500.0, 250),
    ]
}

pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read catalog {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("parse catalog {}", path.display()))
}

pub fn parse_catalog(raw: &str) -> Result<Vec<CatalogEntry>> {
    Ok(serde_json::from_str(raw)?)
}
