//! Error types and exit codes for ecorec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid product input)
//! - 3: Data/store error (missing or malformed catalog, unknown product)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing catalog, unknown product (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ecorec operations
#[derive(Error, Debug)]
pub enum EcorecError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("catalog not found at {path:?} (run `ecorec init` first)")]
    CatalogNotFound { path: PathBuf },

    #[error("invalid catalog {path:?}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    #[error("product not found: {name}")]
    ProductNotFound { name: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl EcorecError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        EcorecError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        EcorecError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        EcorecError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a catalog that cannot be used at all
    pub fn invalid_catalog(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        EcorecError::InvalidCatalog {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EcorecError::UnknownFormat(_)
            | EcorecError::UsageError(_)
            | EcorecError::InvalidValue { .. } => ExitCode::Usage,

            EcorecError::CatalogNotFound { .. }
            | EcorecError::InvalidCatalog { .. }
            | EcorecError::ProductNotFound { .. }
            | EcorecError::AlreadyExists { .. } => ExitCode::Data,

            EcorecError::Io(_)
            | EcorecError::Csv(_)
            | EcorecError::Json(_)
            | EcorecError::Toml(_)
            | EcorecError::FailedOperationWithTarget { .. }
            | EcorecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            EcorecError::UnknownFormat(_) => "unknown_format",
            EcorecError::UsageError(_) => "usage_error",
            EcorecError::InvalidValue { .. } => "invalid_value",
            EcorecError::CatalogNotFound { .. } => "catalog_not_found",
            EcorecError::InvalidCatalog { .. } => "invalid_catalog",
            EcorecError::ProductNotFound { .. } => "product_not_found",
            EcorecError::AlreadyExists { .. } => "already_exists",
            EcorecError::Io(_) => "io_error",
            EcorecError::Csv(_) => "csv_error",
            EcorecError::Json(_) => "json_error",
            EcorecError::Toml(_) => "toml_error",
            EcorecError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            EcorecError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for ecorec operations
pub type Result<T> = std::result::Result<T, EcorecError>;
