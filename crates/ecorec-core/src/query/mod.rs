//! Catalog filtering, name search and sort orders
//!
//! All operations borrow from the catalog and preserve catalog order unless a
//! sort is requested; every sort is stable.

mod picks;

pub use picks::{alternatives, highly_sustainable, top_picks};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::EcorecError;
use crate::product::{Attribute, Product};

/// Category plus "only products with this attribute" switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub required: Vec<Attribute>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Only keep products whose `attribute` is `Yes`
    pub fn require(mut self, attribute: Attribute) -> Self {
        if !self.required.contains(&attribute) {
            self.required.push(attribute);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.required.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category() != category {
                return false;
            }
        }
        self.required
            .iter()
            .all(|attr| product.flags().get(*attr).is_yes())
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Case-insensitive substring search on product names, in catalog order
pub fn search_by_name<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|p| p.name().to_lowercase().contains(&needle))
        .collect()
}

/// Ordering applied to a product listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    Score,
}

impl FromStr for SortOrder {
    type Err = EcorecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(SortOrder::None),
            "price-asc" | "price" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "score" => Ok(SortOrder::Score),
            other => Err(EcorecError::invalid_value(
                "sort order",
                format!("{} (expected: none, price-asc, price-desc, score)", other),
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::None => "none",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Score => "score",
        };
        write!(f, "{}", s)
    }
}

/// Sort in place; equal keys keep their current relative order
pub fn sort_products(products: &mut [&Product], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price().total_cmp(&b.price())),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price().total_cmp(&a.price())),
        SortOrder::Score => {
            products.sort_by(|a, b| b.sustainability_score().cmp(&a.sustainability_score()))
        }
    }
}
