//! Dashboard statistics over the catalog and the search log

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::product::{Attribute, MAX_SCORE};

/// Number of search terms shown on the dashboard
pub const TOP_SEARCH_TERMS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBucket {
    pub score: u8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverage {
    pub category: String,
    pub products: usize,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCount {
    pub attribute: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Everything the dashboard and chart views display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_products: usize,
    pub average_score: f64,
    /// Distinct categories, sorted; the choices offered when filtering or adding
    pub categories: Vec<String>,
    pub score_distribution: Vec<ScoreBucket>,
    pub category_averages: Vec<CategoryAverage>,
    pub feature_spread: Vec<FeatureCount>,
    pub top_search_terms: Vec<TermCount>,
}

pub fn compute_stats(catalog: &Catalog, search_terms: &[String]) -> CatalogStats {
    CatalogStats {
        total_products: catalog.len(),
        average_score: round2(average_score(catalog)),
        categories: catalog.categories().into_iter().map(String::from).collect(),
        score_distribution: score_distribution(catalog),
        category_averages: category_averages(catalog),
        feature_spread: feature_spread(catalog),
        top_search_terms: top_terms(search_terms, TOP_SEARCH_TERMS),
    }
}

/// Mean score, 0 for an empty catalog
pub fn average_score(catalog: &Catalog) -> f64 {
    if catalog.is_empty() {
        return 0.0;
    }
    let total: u64 = catalog
        .iter()
        .map(|p| u64::from(p.sustainability_score()))
        .sum();
    total as f64 / catalog.len() as f64
}

/// Count of products for every score 0..=3, including empty buckets
pub fn score_distribution(catalog: &Catalog) -> Vec<ScoreBucket> {
    (0..=MAX_SCORE)
        .map(|score| ScoreBucket {
            score,
            count: catalog
                .iter()
                .filter(|p| p.sustainability_score() == score)
                .count(),
        })
        .collect()
}

/// Mean score per category, highest first; ties ordered by category name
pub fn category_averages(catalog: &Catalog) -> Vec<CategoryAverage> {
    let mut totals: BTreeMap<&str, (usize, u64)> = BTreeMap::new();
    for product in catalog {
        let entry = totals.entry(product.category()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(product.sustainability_score());
    }

    let mut averages: Vec<CategoryAverage> = totals
        .into_iter()
        .map(|(category, (products, total))| CategoryAverage {
            category: category.to_string(),
            products,
            average_score: total as f64 / products as f64,
        })
        .collect();
    averages.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));
    averages
}

/// Number of `Yes` answers per attribute
pub fn feature_spread(catalog: &Catalog) -> Vec<FeatureCount> {
    Attribute::ALL
        .iter()
        .map(|attr| FeatureCount {
            attribute: attr.label().to_string(),
            count: catalog
                .iter()
                .filter(|p| p.flags().get(*attr).is_yes())
                .count(),
        })
        .collect()
}

/// Most frequent terms, ties broken by first appearance
pub fn top_terms(terms: &[String], limit: usize) -> Vec<TermCount> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, term) in terms.iter().enumerate() {
        counts.entry(term.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(term, count, _)| TermCount {
            term: term.to_string(),
            count,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
