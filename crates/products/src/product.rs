use shopfront_core::{DomainError, DomainResult, Entity, ProductId};

/// Entity: Product.
///
/// `active` is state, not a derived view of `quantity`: it starts `true`, is
/// cleared by `set_quantity` when stock hits exactly zero, and only comes back
/// through an explicit `activate`.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity: i64,
    active: bool,
}

impl Product {
    /// Create a product with a fresh identity.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), name, price, quantity)
    }

    /// Create a product under a caller-supplied identity.
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::invalid_argument("price cannot be negative"));
        }
        if quantity < 0 {
            return Err(DomainError::invalid_argument("quantity cannot be negative"));
        }

        // Active from the start, even with no stock.
        Ok(Self {
            id,
            name,
            price,
            quantity,
            active: true,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Units currently in stock.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replace the stock level.
    ///
    /// Reaching exactly zero deactivates the product. Raising the level again
    /// does not reactivate it; see [`Product::activate`].
    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity < 0 {
            return Err(DomainError::invalid_argument("quantity cannot be negative"));
        }

        self.quantity = quantity;
        if self.quantity == 0 {
            self.active = false;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the product active again. No effect while it has no stock.
    pub fn activate(&mut self) {
        if self.quantity > 0 {
            self.active = true;
        }
    }

    pub fn show(&self) -> String {
        format!(
            "{}, Price: {}, Quantity: {}, Active: {}",
            self.name, self.price, self.quantity, self.active
        )
    }

    /// Take `quantity` units out of stock and return the amount charged.
    ///
    /// Fails without touching stock when `quantity` is not positive or exceeds
    /// what is on hand.
    pub fn buy(&mut self, quantity: i64) -> DomainResult<f64> {
        if quantity <= 0 {
            return Err(DomainError::invalid_quantity("quantity must be positive"));
        }
        if quantity > self.quantity {
            return Err(DomainError::insufficient_stock(
                self.name.clone(),
                quantity,
                self.quantity,
            ));
        }

        let charged = quantity as f64 * self.price;
        self.set_quantity(self.quantity - quantity)?;
        Ok(charged)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Structural equality: every attribute except the identity token.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.price == other.price
            && self.quantity == other.quantity
            && self.active == other.active
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.show())
    }
}
