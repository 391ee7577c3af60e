//! TF-IDF vectorization over feature documents
//!
//! Weights use raw term counts and the smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`. Every row is scaled to unit length, so a dot
//! product between two rows is already their cosine similarity.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::text::tokenize_with_stemming;
use crate::trace_time;

/// Why a document set cannot be vectorized
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInput {
    #[error("no documents to vectorize")]
    NoDocuments,
    #[error("every document is empty after stop word removal")]
    EmptyVocabulary,
}

/// Sparse row, entries sorted by term index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn magnitude(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, wi) = self.entries[i];
            let (tj, wj) = other.entries[j];
            if ti == tj {
                sum += wi * wj;
                i += 1;
                j += 1;
            } else if ti < tj {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }
}

/// Cosine similarity between two sparse vectors
///
/// Zero when either vector has no magnitude.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let magnitude_a = a.magnitude();
    let magnitude_b = b.magnitude();
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    a.dot(b) / (magnitude_a * magnitude_b)
}

/// Vectorized documents plus the vocabulary that indexes their columns
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    /// Terms in column order (lexicographic)
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds a fresh vocabulary and TF-IDF matrix on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct Vectorizer {
    stemming: bool,
}

impl Vectorizer {
    pub fn new(stemming: bool) -> Self {
        Self { stemming }
    }

    pub fn fit_transform(&self, documents: &[String]) -> Result<TfidfMatrix, DegenerateInput> {
        let start = Instant::now();
        if documents.is_empty() {
            return Err(DegenerateInput::NoDocuments);
        }

        // Per-document raw counts; BTreeMap keeps terms in vocabulary order
        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for token in tokenize_with_stemming(doc, self.stemming) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(DegenerateInput::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let mut columns: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for (index, (term, df)) in document_frequency.iter().enumerate() {
            let idf = ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0;
            columns.insert(term, (index, idf));
        }

        let rows = counts
            .iter()
            .map(|tf| {
                let mut entries: Vec<(usize, f64)> = tf
                    .iter()
                    .filter_map(|(term, count)| {
                        columns
                            .get(term.as_str())
                            .map(|(index, idf)| (*index, *count as f64 * idf))
                    })
                    .collect();
                normalize(&mut entries);
                SparseVector { entries }
            })
            .collect();

        let vocabulary: Vec<String> = document_frequency.keys().map(|t| t.to_string()).collect();
        debug!(
            documents = documents.len(),
            terms = vocabulary.len(),
            stemming = self.stemming,
            "vectorize"
        );
        trace_time!(start, "vectorize");

        Ok(TfidfMatrix { vocabulary, rows })
    }
}

fn normalize(entries: &mut [(usize, f64)]) {
    let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in entries.iter_mut() {
            *w /= norm;
        }
    }
}
