use std::collections::HashMap;

use mercato_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Product catalog keyed by id, enforcing id uniqueness on registration.
///
/// Entries are added once and never removed or mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product. Fails if the id is already taken; the existing
    /// entry is left untouched in that case.
    pub fn register(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id_typed();
        if self.entries.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "product {id} is already registered"
            )));
        }
        self.entries.insert(id, product);
        Ok(())
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.entries.values()
    }
}
