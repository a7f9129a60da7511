use shopfront_core::ProductId;

/// Shopping-list entry: which product, how many units.
///
/// Lines reference products by identity; a product that merely looks like one
/// in the store does not match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

impl From<(ProductId, i64)> for OrderLine {
    fn from((product_id, quantity): (ProductId, i64)) -> Self {
        Self::new(product_id, quantity)
    }
}
