//! Error types and exit codes for rickshaw
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing map file, unknown intersection, etc.)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the rickshaw CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing map, unknown intersection (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rickshaw operations
#[derive(Error, Debug)]
pub enum RickshawError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: dijkstra, prim, kruskal, or topo)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("map file not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("invalid map in {path:?}: {reason}")]
    InvalidMap { path: PathBuf, reason: String },

    #[error("unknown intersection: {node}")]
    UnknownIntersection { node: i64 },

    // Generic failures (exit code 1)
    #[error("malformed request: {reason}")]
    MalformedRequest { reason: String },

    #[error("dependency cycle detected")]
    DependencyCycle,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RickshawError {
    /// Create an error for a request body the engine could not decode
    pub fn malformed(reason: impl Into<String>) -> Self {
        RickshawError::MalformedRequest {
            reason: reason.into(),
        }
    }

    /// Create an error for an unusable map file
    pub fn invalid_map(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RickshawError::InvalidMap {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a usage error from a caller-facing message
    pub fn usage(message: impl Into<String>) -> Self {
        RickshawError::UsageError(message.into())
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RickshawError::UnknownFormat(_)
            | RickshawError::UnknownAlgorithm(_)
            | RickshawError::UsageError(_) => ExitCode::Usage,

            // Data errors
            RickshawError::MapNotFound { .. }
            | RickshawError::InvalidMap { .. }
            | RickshawError::UnknownIntersection { .. } => ExitCode::Data,

            // Generic failures
            RickshawError::MalformedRequest { .. }
            | RickshawError::DependencyCycle
            | RickshawError::Io(_)
            | RickshawError::Json(_)
            | RickshawError::Toml(_)
            | RickshawError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RickshawError::UnknownFormat(_) => "unknown_format",
            RickshawError::UnknownAlgorithm(_) => "unknown_algorithm",
            RickshawError::UsageError(_) => "usage_error",
            RickshawError::MapNotFound { .. } => "map_not_found",
            RickshawError::InvalidMap { .. } => "invalid_map",
            RickshawError::UnknownIntersection { .. } => "unknown_intersection",
            RickshawError::MalformedRequest { .. } => "malformed_request",
            RickshawError::DependencyCycle => "dependency_cycle",
            RickshawError::Io(_) => "io_error",
            RickshawError::Json(_) => "json_error",
            RickshawError::Toml(_) => "toml_error",
            RickshawError::Other(_) => "other",
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

/// Result type alias for rickshaw operations
pub type Result<T> = std::result::Result<T, RickshawError>;
