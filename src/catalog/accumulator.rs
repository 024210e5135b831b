use crate::catalog::Product;
use std::collections::HashMap;

/// Builds the identity key of a colour variant
pub fn variant_key(title: &str, colour: &str) -> String {
    format!("{}_{}", title, colour)
}

/// Run-scoped collection of product variants
///
/// Keyed by `title_colour`. The first record inserted under a key is
/// kept; later ones are rejected. Records come back out in insertion
/// order.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a variant with this key has been recorded
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Looks up a recorded variant by its key
    pub fn get(&self, key: &str) -> Option<&Product> {
        self.index.get(key).map(|&i| &self.products[i])
    }

    /// Records a product unless its variant is already present
    ///
    /// Returns true if the product was inserted.
    pub fn insert(&mut self, product: Product) -> bool {
        let key = variant_key(&product.title, &product.colour);
        if self.index.contains_key(&key) {
            return false;
        }

        self.index.insert(key, self.products.len());
        self.products.push(product);
        true
    }

    /// Number of recorded variants
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Consumes the catalog, yielding products in insertion order
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
