//! Ordered product catalog
//!
//! Catalog position is not meaningful to users, but it is the tie-break order
//! for every stable sort over the catalog.

pub mod io;

use std::collections::BTreeSet;

use crate::product::Product;

/// Ordered sequence of products
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn get(&self, position: usize) -> Option<&Product> {
        self.products.get(position)
    }

    /// Position of the first product whose name matches exactly
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name() == name)
    }

    /// First product whose name matches exactly
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.position_of(name).and_then(|idx| self.products.get(idx))
    }

    /// Number of products sharing this exact name
    pub fn count_named(&self, name: &str) -> usize {
        self.products.iter().filter(|p| p.name() == name).count()
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
