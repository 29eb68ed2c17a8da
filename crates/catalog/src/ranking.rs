//! Price-based top-N ranking.

use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;

/// Sort direction for [`top_n`].
///
/// Parses from the wire tokens `precioAsc` / `precioDesc`; anything else is
/// a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Ascending,
    Descending,
}

impl FromStr for PriceOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "precioAsc" => Ok(Self::Ascending),
            "precioDesc" => Ok(Self::Descending),
            other => Err(CatalogError::validation(format!(
                "unknown sort criterion: {other}"
            ))),
        }
    }
}

/// First `min(n, len)` products of a price-sorted copy of the input.
///
/// The sort is stable (tied prices keep their relative order) and never
/// reorders the caller's sequence. An `n` larger than the collection returns
/// the whole sorted sequence; `n == 0` is rejected.
pub fn top_n(products: &[Product], n: usize, order: PriceOrder) -> CatalogResult<Vec<Product>> {
    if n == 0 {
        return Err(CatalogError::validation("n must be a positive integer"));
    }

    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| match order {
        PriceOrder::Ascending => a.price.total_cmp(&b.price),
        PriceOrder::Descending => b.price.total_cmp(&a.price),
    });
    sorted.truncate(n);
    Ok(sorted)
}
