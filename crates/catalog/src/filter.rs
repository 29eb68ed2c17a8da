//! Composable filter predicates over a product snapshot.

use crate::product::Product;

/// Optional filter constraints, combined with logical AND.
///
/// Absent fields impose no constraint. Numeric bounds are assumed already
/// parsed and validated by the caller; the boundary rejects malformed input
/// before building a criteria value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact name match, case-insensitive (not substring).
    pub name: Option<String>,
    /// Keep products with `price >= min_price`.
    pub min_price: Option<f64>,
    /// Keep products with `price <= max_price`.
    pub max_price: Option<f64>,
    /// Exact, case-sensitive category membership.
    pub category: Option<String>,
}

impl FilterCriteria {
    fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if product.name.to_lowercase() != name.to_lowercase() {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if let Some(category) = &self.category {
            // Unlike the name filter, membership is case-sensitive.
            if !product.in_category(category) {
                return false;
            }
        }
        true
    }
}

/// Keep the products matching every present constraint, preserving the
/// relative order of the input.
pub fn apply(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
