//! Store configuration for ecorec
//!
//! Configuration lives in `ecorec.toml` at the store root. Every field has a
//! default, so a missing or partial file is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EcorecError, Result};
use crate::similarity::{RecommendOptions, DEFAULT_TOP_N};

/// Config file name at the store root
pub const CONFIG_FILE: &str = "ecorec.toml";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcorecConfig {
    /// Catalog CSV, relative to the store root
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Search log, relative to the store root
    #[serde(default = "default_search_log")]
    pub search_log: String,

    /// Feedback log, relative to the store root
    #[serde(default = "default_feedback_log")]
    pub feedback_log: String,

    #[serde(default)]
    pub recommend: RecommendConfig,

    #[serde(default)]
    pub picks: PicksConfig,
}

/// Recommendation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Stem terms before weighting (optional; default false)
    #[serde(default)]
    pub stemming: bool,
}

/// Curated list sizes and thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PicksConfig {
    /// Lowest score counted as highly sustainable
    #[serde(default = "default_high_score_threshold")]
    pub high_score_threshold: u8,

    #[serde(default = "default_top_picks")]
    pub top_picks: usize,

    /// Suggestions shown when a filter matches nothing
    #[serde(default = "default_alternatives")]
    pub alternatives: usize,
}

fn default_catalog() -> String {
    "products.csv".to_string()
}

fn default_search_log() -> String {
    "search_log.csv".to_string()
}

fn default_feedback_log() -> String {
    "feedback.txt".to_string()
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_high_score_threshold() -> u8 {
    2
}

fn default_top_picks() -> usize {
    3
}

fn default_alternatives() -> usize {
    3
}

impl Default for EcorecConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            search_log: default_search_log(),
            feedback_log: default_feedback_log(),
            recommend: RecommendConfig::default(),
            picks: PicksConfig::default(),
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            stemming: false,
        }
    }
}

impl Default for PicksConfig {
    fn default() -> Self {
        Self {
            high_score_threshold: default_high_score_threshold(),
            top_picks: default_top_picks(),
            alternatives: default_alternatives(),
        }
    }
}

impl EcorecConfig {
    /// Vectorizer options derived from the `[recommend]` table
    pub fn recommend_options(&self) -> RecommendOptions {
        RecommendOptions {
            stemming: self.recommend.stemming,
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EcorecConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EcorecError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
