//! Product model and seed data.

use serde::{Deserialize, Serialize};

/// A catalog record.
///
/// Field names on the wire are the Spanish identifiers of the public API
/// (`nombre`, `precio`, `categorias`); the struct keeps English names
/// internally. `id` is unique and immutable; only `name` is ever mutated
/// (via [`crate::store::ProductStore::rename`]). `price` is non-negative.
/// Category order carries no meaning but is preserved for output fidelity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categorias")]
    pub categories: Vec<String>,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64, categories: &[&str]) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Exact, case-sensitive category membership.
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// The fixed collection loaded at process start. Ids are unique and prices
/// non-negative; no create or delete path exists beyond this seed.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Laptop",
            999.99,
            &["Computadoras", "Tecnología", "Portátiles"],
        ),
        Product::new(
            2,
            "Teclado mecánico",
            79.99,
            &["Periféricos", "Accesorios", "Tecnología"],
        ),
        Product::new(3, "Monitor ultrawide", 499.99, &["Monitores", "Tecnología"]),
        Product::new(4, "Disco duro SSD", 129.99, &["Almacenamiento", "Tecnología"]),
        Product::new(
            5,
            "Disco duro Mecanico",
            89.99,
            &["Almacenamiento", "Tecnología"],
        ),
    ]
}
