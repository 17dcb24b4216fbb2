use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};

use mercato_core::{DomainError, DomainResult, Entity, ProductId, StoreId};
use mercato_products::{Catalog, Product};
use mercato_stores::Store;

use crate::reports::{ProductSales, StoreRevenue, TopProducts};

/// A retail chain: member stores in insertion order plus a chain-wide
/// product catalog.
///
/// The catalog supplies display names for reports and is independent of the
/// per-store product registrations; a product may be registered chain-wide
/// without being stocked anywhere.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    stores: Vec<Store>,
    catalog: Catalog,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a store to the chain. Fails with a conflict if a store with the
    /// same id is already a member.
    pub fn add_store(&mut self, store: Store) -> DomainResult<()> {
        let id = store.id_typed();
        if self.stores.iter().any(|existing| existing.id_typed() == id) {
            return Err(DomainError::conflict(format!(
                "store {id} is already part of the chain"
            )));
        }
        tracing::info!(store = %id, name = store.name(), "store added to chain");
        self.stores.push(store);
        Ok(())
    }

    /// Register a product in the chain-wide catalog. Fails with a conflict
    /// on a duplicate id.
    pub fn register_product(&mut self, product: Product) -> DomainResult<()> {
        tracing::debug!(product = %product.id(), "product registered chain-wide");
        self.catalog.register(product)
    }

    /// Total revenue across every member store.
    pub fn total_revenue(&self) -> f64 {
        self.stores.iter().map(Store::total_revenue).sum()
    }

    /// The member store with the highest total revenue.
    ///
    /// Ties go to the earliest-added store. Fails when the chain has no
    /// stores.
    pub fn top_grossing_store(&self) -> DomainResult<StoreRevenue> {
        let mut best: Option<(&Store, f64)> = None;
        for store in &self.stores {
            let revenue = store.total_revenue();
            let beats_current = best.is_none_or(|(_, top)| revenue > top);
            if beats_current {
                best = Some((store, revenue));
            }
        }

        let (store, revenue) =
            best.ok_or_else(|| DomainError::invalid_state("chain has no stores"))?;
        Ok(StoreRevenue {
            store_id: store.id_typed(),
            name: store.name().to_string(),
            revenue,
        })
    }

    /// Best-selling products across the chain, at most `limit` entries.
    ///
    /// Units are summed per product id over every store's ledger, then
    /// ordered by units descending with ties broken by ascending product id.
    /// Names resolve through the chain catalog; ids never registered
    /// chain-wide get a synthesized `Product <id>` label.
    pub fn top_selling_products(&self, limit: usize) -> Vec<ProductSales> {
        let mut totals: HashMap<ProductId, u64> = HashMap::new();
        for store in &self.stores {
            for (product_id, units) in store.sales() {
                *totals.entry(*product_id).or_insert(0) += units;
            }
        }

        let mut merged: Vec<(ProductId, u64)> = totals.into_iter().collect();
        merged.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        merged.truncate(limit);

        merged
            .into_iter()
            .map(|(product_id, units)| ProductSales {
                product_id,
                name: self
                    .catalog
                    .get(product_id)
                    .map(|product| product.name().to_string())
                    .unwrap_or_else(|| format!("Product {product_id}")),
                units,
            })
            .collect()
    }

    /// The classic top-5 report.
    pub fn top_five_products(&self) -> TopProducts {
        TopProducts {
            entries: self.top_selling_products(5),
        }
    }

    /// Member stores open at the given weekday and time, in insertion order.
    pub fn stores_open_at(&self, weekday: Weekday, time: NaiveTime) -> Vec<&Store> {
        self.stores
            .iter()
            .filter(|store| store.is_open_at(weekday, time))
            .collect()
    }

    pub fn store(&self, id: StoreId) -> Option<&Store> {
        self.stores.iter().find(|store| store.id_typed() == id)
    }

    /// Mutable lookup; sales against chain-owned stores go through here.
    pub fn store_mut(&mut self, id: StoreId) -> Option<&mut Store> {
        self.stores.iter_mut().find(|store| store.id_typed() == id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// All member stores, in insertion order.
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }
}
