//! Error types and exit codes for ferry
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid weights, unknown vertices)
//! - 3: Data error (unreadable or malformed input files)

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
    /// Data error - missing or malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ferry operations
#[derive(Error, Debug)]
pub enum FerryError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: bfs, dfs, dijkstra, or all)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    /// Edge weight is negative, infinite or not a number
    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be finite and non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Search endpoint absent from the edge store (strict endpoint mode)
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("invalid input in {path:?}: {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl FerryError {
    /// Create an error for a rejected edge weight
    pub fn invalid_weight(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        weight: f64,
    ) -> Self {
        FerryError::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    /// Create an error for a search endpoint missing from the store
    pub fn unknown_vertex(vertex: impl std::fmt::Display) -> Self {
        FerryError::UnknownVertex {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FerryError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed input file
    pub fn invalid_input(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        FerryError::InvalidInput {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        FerryError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FerryError::UnknownFormat(_)
            | FerryError::UnknownStrategy(_)
            | FerryError::UsageError(_)
            | FerryError::InvalidWeight { .. }
            | FerryError::UnknownVertex { .. }
            | FerryError::InvalidValue { .. } => ExitCode::Usage,

            FerryError::FileNotFound { .. } | FerryError::InvalidInput { .. } => ExitCode::Data,

            FerryError::Io(_)
            | FerryError::Json(_)
            | FerryError::Toml(_)
            | FerryError::FailedOperation { .. }
            | FerryError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            FerryError::UnknownFormat(_) => "unknown_format",
            FerryError::UnknownStrategy(_) => "unknown_strategy",
            FerryError::UsageError(_) => "usage_error",
            FerryError::InvalidWeight { .. } => "invalid_weight",
            FerryError::UnknownVertex { .. } => "unknown_vertex",
            FerryError::InvalidValue { .. } => "invalid_value",
            FerryError::FileNotFound { .. } => "file_not_found",
            FerryError::InvalidInput { .. } => "invalid_input",
            FerryError::Io(_) => "io_error",
            FerryError::Json(_) => "json_error",
            FerryError::Toml(_) => "toml_error",
            FerryError::FailedOperation { .. } => "failed_operation",
            FerryError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for ferry operations
pub type Result<T> = std::result::Result<T, FerryError>;
