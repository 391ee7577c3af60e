use super::tfidf::{cosine_similarity, TfidfMatrix};

/// Dense pairwise cosine similarities, indexed by catalog position
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute every pair once and mirror it across the diagonal
    pub fn from_tfidf(tfidf: &TfidfMatrix) -> Self {
        let rows = tfidf.rows();
        let size = rows.len();
        let mut values = vec![0.0; size * size];

        for i in 0..size {
            for j in i..size {
                let score = cosine_similarity(&rows[i], &rows[j]);
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }

        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.values[i * self.size + j])
        } else {
            None
        }
    }

    /// Similarities of one product against the whole catalog
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.size {
            Some(&self.values[i * self.size..(i + 1) * self.size])
        } else {
            None
        }
    }
}
