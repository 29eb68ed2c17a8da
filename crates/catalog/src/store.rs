//! Single-owner product store.

use std::sync::{PoisonError, RwLock};

use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;

/// Owns the mutable product collection.
///
/// Every read path goes through [`ProductStore::snapshot`]; the only mutation
/// is [`ProductStore::rename`], which runs under the write lock, so a reader
/// observes the collection strictly before or strictly after a rename, never
/// a half-applied record.
#[derive(Debug)]
pub struct ProductStore {
    inner: RwLock<Vec<Product>>,
}

impl ProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            inner: RwLock::new(products),
        }
    }

    /// Current state of every record, in seed order.
    pub fn snapshot(&self) -> Vec<Product> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Append `" " + suffix` to the name of the product with `id`.
    ///
    /// Returns the updated record. Not idempotent: each call appends again.
    /// Fails with [`CatalogError::NotFound`] (leaving the collection
    /// untouched) when no product has that id.
    pub fn rename(&self, id: u32, suffix: &str) -> CatalogResult<Product> {
        let mut products = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound)?;

        product.name.push(' ');
        product.name.push_str(suffix);
        Ok(product.clone())
    }
}
