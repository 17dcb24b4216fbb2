use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};

use mercato_core::{DomainError, DomainResult, Entity, ProductId, StoreId};
use mercato_products::Product;
use mercato_schedule::WeeklySchedule;

/// A single store: local product details, current stock, cumulative sales.
///
/// The three maps are keyed by product id and only ever grow; products are
/// never deregistered. Stock decreases and sold units increase exclusively
/// through [`Store::sell`].
#[derive(Debug, Clone)]
pub struct Store {
    id: StoreId,
    name: String,
    schedule: Option<WeeklySchedule>,
    products: HashMap<ProductId, Product>,
    inventory: HashMap<ProductId, u32>,
    ledger: HashMap<ProductId, u64>,
}

impl Store {
    /// Create a store with no opening schedule. Fails on a blank name.
    pub fn new(id: StoreId, name: impl Into<String>) -> DomainResult<Self> {
        Self::build(id, name.into(), None)
    }

    /// Create a store with a weekly opening schedule. Fails on a blank name.
    pub fn with_schedule(
        id: StoreId,
        name: impl Into<String>,
        schedule: WeeklySchedule,
    ) -> DomainResult<Self> {
        Self::build(id, name.into(), Some(schedule))
    }

    fn build(id: StoreId, name: String, schedule: Option<WeeklySchedule>) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name cannot be blank"));
        }
        Ok(Self {
            id,
            name,
            schedule,
            products: HashMap::new(),
            inventory: HashMap::new(),
            ledger: HashMap::new(),
        })
    }

    pub fn id_typed(&self) -> StoreId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> Option<&WeeklySchedule> {
        self.schedule.as_ref()
    }

    /// Register a product with its initial stock level.
    ///
    /// Registering an id that is already present overwrites the stored
    /// detail and stock; uniqueness is enforced at the chain catalog, not
    /// here. The sales ledger for the id is left untouched.
    pub fn register_product(&mut self, product: Product, initial_stock: u32) {
        let id = product.id_typed();
        tracing::debug!(store = %self.id, product = %id, initial_stock, "product registered");
        self.products.insert(id, product);
        self.inventory.insert(id, initial_stock);
    }

    /// Record a sale and return the transaction revenue (`price * quantity`).
    ///
    /// Checks run in order: quantity, product existence, stock level. Any
    /// failure leaves stock and ledger exactly as they were.
    pub fn sell(&mut self, product_id: ProductId, quantity: u32) -> DomainResult<f64> {
        if quantity == 0 {
            return Err(DomainError::invalid_argument(
                "quantity must be greater than zero",
            ));
        }

        let product = self.products.get(&product_id).ok_or_else(|| {
            DomainError::not_found(format!(
                "product {product_id} is not registered at store {}",
                self.id
            ))
        })?;

        let available = self.inventory.get(&product_id).copied().unwrap_or(0);
        if available < quantity {
            return Err(DomainError::InsufficientStock {
                product_id,
                available,
                requested: quantity,
            });
        }

        let revenue = product.price() * f64::from(quantity);
        self.inventory.insert(product_id, available - quantity);
        *self.ledger.entry(product_id).or_insert(0) += u64::from(quantity);

        tracing::debug!(
            store = %self.id,
            product = %product_id,
            quantity,
            revenue,
            "sale recorded"
        );
        Ok(revenue)
    }

    /// Cumulative units sold for the product; 0 when never sold.
    pub fn units_sold(&self, product_id: ProductId) -> u64 {
        self.ledger.get(&product_id).copied().unwrap_or(0)
    }

    /// Revenue accumulated for one product; 0.0 when the product is unknown
    /// to this store.
    pub fn revenue_for_product(&self, product_id: ProductId) -> f64 {
        match self.products.get(&product_id) {
            Some(product) => product.price() * self.units_sold(product_id) as f64,
            None => 0.0,
        }
    }

    /// Total revenue across every product with recorded sales.
    pub fn total_revenue(&self) -> f64 {
        self.ledger
            .iter()
            .map(|(product_id, units)| {
                self.products
                    .get(product_id)
                    .map_or(0.0, |product| product.price() * *units as f64)
            })
            .sum()
    }

    /// Current stock for the product; 0 when unknown.
    pub fn stock_of(&self, product_id: ProductId) -> u32 {
        self.inventory.get(&product_id).copied().unwrap_or(0)
    }

    /// True iff the store has a schedule and it is open at the given weekday
    /// and time. A store without a schedule is closed.
    pub fn is_open_at(&self, weekday: Weekday, time: NaiveTime) -> bool {
        self.schedule
            .as_ref()
            .is_some_and(|schedule| schedule.is_open_at(weekday, time))
    }

    /// Read-only view of the sales ledger (product id -> units sold), for
    /// chain-level aggregation.
    pub fn sales(&self) -> &HashMap<ProductId, u64> {
        &self.ledger
    }
}

impl Entity for Store {
    type Id = StoreId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
