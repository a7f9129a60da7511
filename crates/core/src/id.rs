//! Strongly-typed identifiers used across the domain.

use uuid::Uuid;

/// Identity token of a product.
///
/// Two products with identical attributes still carry different ids, which is
/// what store membership is checked against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
