//! Error types for `import_mapping_check`.
//!
//! Validation failures are never errors: validators return them as
//! `Diagnostics`. This module covers the operational failures around a
//! validation run (missing or malformed bundle, bad configuration, I/O) and
//! the CLI's "import blocked" outcome.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Supports `anyhow` integration via `Other`
//! - Provides recovery hints for user-facing errors
//! - Provides structured JSON output for scripted callers

mod structured;

pub use structured::{ErrorCode, StructuredError};

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for `import_mapping_check` operations.
#[derive(Error, Debug)]
pub enum ImportCheckError {
    // === Bundle Errors ===
    /// Bundle file not found at the specified path.
    #[error("Bundle not found at '{path}'")]
    BundleNotFound { path: PathBuf },

    /// Bundle file could not be parsed.
    #[error("Failed to parse bundle '{path}': {reason}")]
    BundleParse { path: PathBuf, reason: String },

    /// Message catalogue could not be read.
    #[error("Failed to read message catalogue '{path}': {source}")]
    Messages {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Outcome ===
    /// Validation found errors; the import must not proceed.
    #[error("Import blocked: {errors} error(s) found")]
    ImportBlocked { errors: usize },

    // === Configuration Errors ===
    /// Configuration file error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Wrapped anyhow error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImportCheckError {
    /// Can the user fix this without code changes?
    #[must_use]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::BundleNotFound { .. }
                | Self::BundleParse { .. }
                | Self::Messages { .. }
                | Self::ImportBlocked { .. }
                | Self::Config(_)
        )
    }

    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::BundleNotFound { .. } => Some("Check the bundle path"),
            Self::BundleParse { .. } => {
                Some("The bundle must be a JSON or YAML document with backup, mappings and target")
            }
            Self::Messages { .. } => Some("Check messages.file or the --messages path"),
            Self::ImportBlocked { .. } => {
                Some("Fix the reported errors in the target system, then check again")
            }
            Self::Config(_) => Some("Run: imc config to see the effective settings"),
            _ => None,
        }
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ImportBlocked { .. } => 2,
            _ => 1,
        }
    }

    /// Create a bundle parse error.
    #[must_use]
    pub fn bundle_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::BundleParse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `ImportCheckError`.
pub type Result<T> = std::result::Result<T, ImportCheckError>;
