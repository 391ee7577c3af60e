//! Content-based recommendation engine
//!
//! Every request rebuilds the whole pipeline from the catalog it is given:
//! feature documents, TF-IDF vocabulary and the pairwise similarity matrix.
//! Nothing is cached between calls.

mod duplicates;
mod features;
mod matrix;
mod tfidf;

pub use duplicates::{find_near_duplicates, NearDuplicate};
pub use features::build_feature_documents;
pub use matrix::SimilarityMatrix;
pub use tfidf::{cosine_similarity, DegenerateInput, SparseVector, TfidfMatrix, Vectorizer};

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::trace_time;

/// Number of recommendations returned when the caller does not say
pub const DEFAULT_TOP_N: usize = 3;

/// Knobs for the vectorizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Collapse inflected forms ("bags" and "bag") before weighting
    pub stemming: bool,
}

/// One recommended product, projected for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub sustainability_score: u8,
    pub price: f64,
}

/// Why a recommendation list came back the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum RecommendStatus {
    Ok,
    EmptyCatalog,
    ZeroLimit,
    UnknownProduct,
    DegenerateInput(DegenerateInput),
}

impl RecommendStatus {
    /// Stable snake_case code for records output and logs
    pub fn code(&self) -> &'static str {
        match self {
            RecommendStatus::Ok => "ok",
            RecommendStatus::EmptyCatalog => "empty_catalog",
            RecommendStatus::ZeroLimit => "zero_limit",
            RecommendStatus::UnknownProduct => "unknown_product",
            RecommendStatus::DegenerateInput(DegenerateInput::NoDocuments) => "no_documents",
            RecommendStatus::DegenerateInput(DegenerateInput::EmptyVocabulary) => {
                "empty_vocabulary"
            }
        }
    }
}

/// Result of a recommendation request
///
/// Callers only ever see an empty list or a ranked list; `status` says which
/// case produced an empty one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub items: Vec<Recommendation>,
    pub status: RecommendStatus,
}

impl Recommendations {
    fn empty(status: RecommendStatus) -> Self {
        Self {
            items: Vec::new(),
            status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Recommend the `top_n` products most similar to `query_name`
///
/// The query product is resolved by exact name; with duplicate names the
/// first one in catalog order is used. The query itself is never returned.
pub fn recommend(
    catalog: &Catalog,
    query_name: &str,
    top_n: usize,
    options: &RecommendOptions,
) -> Recommendations {
    let start = Instant::now();

    if catalog.is_empty() {
        return Recommendations::empty(RecommendStatus::EmptyCatalog);
    }
    if top_n == 0 {
        return Recommendations::empty(RecommendStatus::ZeroLimit);
    }
    let Some(query) = catalog.position_of(query_name) else {
        debug!(query = query_name, "recommend: unknown product");
        return Recommendations::empty(RecommendStatus::UnknownProduct);
    };

    let documents = build_feature_documents(catalog);
    let tfidf = match Vectorizer::new(options.stemming).fit_transform(&documents) {
        Ok(m) => m,
        Err(reason) => {
            debug!(%reason, "recommend: degenerate input");
            return Recommendations::empty(RecommendStatus::DegenerateInput(reason));
        }
    };
    let matrix = SimilarityMatrix::from_tfidf(&tfidf);
    let Some(scores) = matrix.row(query) else {
        return Recommendations::empty(RecommendStatus::UnknownProduct);
    };

    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(position, _)| *position != query)
        .collect();
    // sort_by is stable: equal scores keep catalog order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(top_n);

    let items = ranked
        .into_iter()
        .filter_map(|(position, score)| {
            let product = catalog.get(position)?;
            debug!(name = product.name(), score, "recommend: candidate");
            Some(Recommendation {
                name: product.name().to_string(),
                sustainability_score: product.sustainability_score(),
                price: product.price(),
            })
        })
        .collect();

    trace_time!(start, "recommend", products = catalog.len());
    Recommendations {
        items,
        status: RecommendStatus::Ok,
    }
}

#[cfg(test)]
mod tests;
