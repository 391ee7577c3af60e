//! Append-only activity logs: searched terms and user feedback
//!
//! The search log has no header; each line is `timestamp,term`. The feedback
//! log is plain text, one `name: comment` line per entry.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EcorecError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLogEntry {
    pub timestamp: String,
    pub term: String,
}

impl SearchLogEntry {
    pub fn now(term: impl Into<String>) -> Self {
        Self::at(Local::now().naive_local(), term)
    }

    pub fn at(timestamp: NaiveDateTime, term: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            term: term.into(),
        }
    }
}

/// Append one search to the log, creating the file if needed
pub fn append_search(path: &Path, entry: &SearchLogEntry) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| EcorecError::io_operation("open", path.display(), e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(entry)?;
    writer.flush()?;
    debug!(term = %entry.term, "append_search");
    Ok(())
}

/// Read every searched term, oldest first
///
/// A missing log is an empty history. Malformed lines are skipped.
pub fn read_search_terms(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut terms = Vec::new();
    for record in reader.deserialize::<SearchLogEntry>() {
        match record {
            Ok(entry) => terms.push(entry.term),
            Err(e) => warn!(error = %e, "skipping unreadable search log line"),
        }
    }
    Ok(terms)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackEntry {
    pub name: String,
    pub comment: String,
}

impl FeedbackEntry {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Result<Self> {
        let comment = comment.into();
        if comment.trim().is_empty() {
            return Err(EcorecError::invalid_value("feedback", "comment is empty"));
        }
        Ok(Self {
            name: name.into(),
            comment,
        })
    }

    /// Newlines are folded so one entry stays one line
    fn to_line(&self) -> String {
        let flatten = |s: &str| s.replace(['\r', '\n'], " ");
        format!("{}: {}\n", flatten(&self.name), flatten(&self.comment))
    }
}

pub fn append_feedback(path: &Path, entry: &FeedbackEntry) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| EcorecError::io_operation("open", path.display(), e))?;
    file.write_all(entry.to_line().as_bytes())?;
    debug!(name = %entry.name, "append_feedback");
    Ok(())
}
