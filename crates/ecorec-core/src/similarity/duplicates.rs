use serde::Serialize;
use tracing::debug;

use super::features::build_feature_documents;
use super::matrix::SimilarityMatrix;
use super::tfidf::Vectorizer;
use super::RecommendOptions;
use crate::catalog::Catalog;

/// Two catalog positions whose feature documents are nearly the same
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearDuplicate {
    pub first: usize,
    pub second: usize,
    pub similarity: f64,
}

/// Find all near-duplicates in the catalog
///
/// Returns every pair `(first, second)` with `first < second` and similarity
/// >= threshold, sorted by similarity in descending order. Equal scores keep
/// catalog order. A catalog that cannot be vectorized has no duplicates.
pub fn find_near_duplicates(
    catalog: &Catalog,
    threshold: f64,
    options: &RecommendOptions,
) -> Vec<NearDuplicate> {
    let documents = build_feature_documents(catalog);
    let tfidf = match Vectorizer::new(options.stemming).fit_transform(&documents) {
        Ok(m) => m,
        Err(reason) => {
            debug!(%reason, "find_near_duplicates: nothing to compare");
            return Vec::new();
        }
    };
    let matrix = SimilarityMatrix::from_tfidf(&tfidf);

    let mut duplicates = Vec::new();
    for first in 0..matrix.size() {
        for second in first + 1..matrix.size() {
            let similarity = matrix.get(first, second).unwrap_or(0.0);
            if similarity >= threshold {
                duplicates.push(NearDuplicate {
                    first,
                    second,
                    similarity,
                });
            }
        }
    }

    duplicates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    duplicates
}
