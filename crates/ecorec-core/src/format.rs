//! Output format handling for ecorec
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented `key=value` format for scripting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EcorecError;

/// Output format for ecorec commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output, one `key=value` line per item
    Records,
}

impl FromStr for OutputFormat {
    type Err = EcorecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(EcorecError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Quote a records value when it contains whitespace or quotes
pub fn escape_record_value(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// Format a price the way every output format shows it
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}
