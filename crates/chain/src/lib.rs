//! Chain domain module.
//!
//! A chain owns an ordered collection of stores and a chain-wide product
//! catalog, and aggregates per-store sales into chain-level reports: total
//! revenue, top-grossing store, top-selling products, open-now lookups.

pub mod chain;
pub mod reports;

pub use chain::Chain;
pub use reports::{ProductSales, StoreRevenue, TopProducts};
