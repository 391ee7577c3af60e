//! Side-by-side product comparison

use std::collections::HashMap;

use serde::Serialize;

use crate::bail_usage;
use crate::catalog::Catalog;
use crate::error::{EcorecError, Result};
use crate::product::EcoFlags;
use crate::stats::category_averages;

/// Fewest products a comparison accepts
pub const MIN_COMPARED: usize = 2;

/// One column of a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(flatten)]
    pub flags: EcoFlags,
    pub sustainability_score: u8,
    pub category_average: f64,
}

/// Compare products by exact name, in the order given
pub fn compare(catalog: &Catalog, names: &[String]) -> Result<Vec<ComparedProduct>> {
    if names.len() < MIN_COMPARED {
        bail_usage!(format!(
            "select at least {} products to compare (got {})",
            MIN_COMPARED,
            names.len()
        ));
    }

    let averages: HashMap<String, f64> = category_averages(catalog)
        .into_iter()
        .map(|a| (a.category, a.average_score))
        .collect();

    names
        .iter()
        .map(|name| {
            let product = catalog
                .find(name)
                .ok_or_else(|| EcorecError::ProductNotFound { name: name.clone() })?;
            Ok(ComparedProduct {
                name: product.name().to_string(),
                category: product.category().to_string(),
                price: product.price(),
                flags: *product.flags(),
                sustainability_score: product.sustainability_score(),
                category_average: averages.get(product.category()).copied().unwrap_or(0.0),
            })
        })
        .collect()
}
