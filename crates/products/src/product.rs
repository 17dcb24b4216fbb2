use serde::{Deserialize, Serialize};

use mercato_core::{DomainError, DomainResult, Entity, ProductId};

/// Immutable catalog entry: id, display name, unit price.
///
/// Constructed once and never mutated; catalogs and stores hold it by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    /// Create a product, validating the pricing and naming invariants.
    ///
    /// The price must be a finite number strictly greater than zero, and the
    /// name must contain at least one non-whitespace character.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let name = name.into();

        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::invalid_argument(
                "price must be greater than zero",
            ));
        }
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name cannot be blank"));
        }

        Ok(Self { id, name, price })
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
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
