//! Structured results of chain-level reports.
//!
//! The structs are the authoritative contract; their `Display`
//! implementations are presentation conveniences only.

use core::fmt;

use mercato_core::{ProductId, StoreId};

/// Revenue standing of a single store within the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRevenue {
    pub store_id: StoreId,
    pub name: String,
    pub revenue: f64,
}

impl fmt::Display for StoreRevenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}). Total revenue: {}",
            self.name, self.store_id, self.revenue
        )
    }
}

/// Aggregated units sold for one product across the whole chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product_id: ProductId,
    pub name: String,
    pub units: u64,
}

impl fmt::Display for ProductSales {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.units)
    }
}

/// Best-selling products, ordered by units descending (ties by ascending
/// product id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopProducts {
    pub entries: Vec<ProductSales>,
}

impl fmt::Display for TopProducts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.entries {
            if !first {
                write!(f, " - ")?;
            }
            write!(f, "{entry}")?;
            first = false;
        }
        Ok(())
    }
}
