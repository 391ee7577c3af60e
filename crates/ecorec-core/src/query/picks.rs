use crate::catalog::Catalog;
use crate::product::{Product, MAX_SCORE};

use super::{sort_products, SortOrder};

/// Cheapest products with a perfect score
pub fn top_picks(catalog: &Catalog, limit: usize) -> Vec<&Product> {
    let mut picks: Vec<&Product> = catalog
        .iter()
        .filter(|p| p.sustainability_score() == MAX_SCORE)
        .collect();
    sort_products(&mut picks, SortOrder::PriceAsc);
    picks.truncate(limit);
    picks
}

/// Products scoring at least `threshold`, in catalog order
pub fn highly_sustainable(catalog: &Catalog, threshold: u8) -> Vec<&Product> {
    catalog
        .iter()
        .filter(|p| p.sustainability_score() >= threshold)
        .collect()
}

/// Suggestions shown when a filter matches nothing
///
/// Best score first, catalog order among equals.
pub fn alternatives(catalog: &Catalog, threshold: u8, limit: usize) -> Vec<&Product> {
    let mut candidates = highly_sustainable(catalog, threshold);
    sort_products(&mut candidates, SortOrder::Score);
    candidates.truncate(limit);
    candidates
}
