//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Keep this focused on deterministic query/mutation failures. Transport
/// concerns (status codes, response bodies) belong to the HTTP boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A request parameter failed validation (e.g. malformed or missing).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No product exists with the requested id.
    #[error("product not found")]
    NotFound,

    /// An aggregation was requested over an empty (possibly filtered) set.
    #[error("no products matched the requested category")]
    EmptyResultSet,
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
