//! Category grouping and price averaging.

use std::collections::HashMap;

use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;

/// Number of products carrying each category.
///
/// A product belonging to several categories counts once toward each of
/// them, so the sum of all counts equals the total number of
/// (product, category) membership pairs. Iteration order of the result is
/// unspecified.
pub fn count_by_category(products: &[Product]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for product in products {
        for category in &product.categories {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Arithmetic mean of `price`, optionally restricted to one category first.
///
/// Fails with [`CatalogError::EmptyResultSet`] when nothing matches instead
/// of producing NaN or a silent zero. Summation runs in input order with
/// plain f64 arithmetic.
pub fn average_price(products: &[Product], category: Option<&str>) -> CatalogResult<f64> {
    let prices: Vec<f64> = products
        .iter()
        .filter(|p| category.is_none_or(|c| p.in_category(c)))
        .map(|p| p.price)
        .collect();

    if prices.is_empty() {
        return Err(CatalogError::EmptyResultSet);
    }

    Ok(prices.iter().sum::<f64>() / prices.len() as f64)
}
