//! Store domain module.
//!
//! A store owns its product details, current stock, and cumulative sales
//! ledger, all keyed by product id. Selling is the only operation that
//! mutates sales state anywhere in the system.

pub mod store;

pub use store::Store;
