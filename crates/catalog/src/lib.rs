//! `catalogo-catalog` — catalog domain core.
//!
//! This crate contains the product model and the query/aggregation/ranking
//! engines, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). Everything operates on in-memory snapshots handed out by the
//! [`ProductStore`].

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod product;
pub mod ranking;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use filter::FilterCriteria;
pub use product::{seed_products, Product};
pub use ranking::PriceOrder;
pub use store::ProductStore;
