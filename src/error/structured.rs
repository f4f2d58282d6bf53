//! Structured error output for scripted callers.
//!
//! When `--json` is active the CLI prints failures as a single JSON object
//! with a stable code, the message and an optional hint, instead of plain
//! text on stderr.

use crate::error::ImportCheckError;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Machine-readable error codes.
///
/// Format: `SCREAMING_SNAKE_CASE` for easy parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // === Bundle Errors ===
    /// Bundle file not found
    BundleNotFound,
    /// Bundle could not be parsed
    BundleParseError,
    /// Message catalogue unreadable
    MessagesError,

    // === Outcome ===
    /// Validation reported errors
    ImportBlocked,

    // === Config Errors ===
    ConfigError,

    // === I/O Errors ===
    IoError,
    JsonError,
    YamlError,

    // === Internal Errors ===
    InternalError,
}

impl ErrorCode {
    /// Get the string representation for JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BundleNotFound => "BUNDLE_NOT_FOUND",
            Self::BundleParseError => "BUNDLE_PARSE_ERROR",
            Self::MessagesError => "MESSAGES_ERROR",
            Self::ImportBlocked => "IMPORT_BLOCKED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::YamlError => "YAML_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Whether rerunning after fixing the input can succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::BundleNotFound | Self::BundleParseError | Self::ImportBlocked
        )
    }
}

impl From<&ImportCheckError> for ErrorCode {
    fn from(err: &ImportCheckError) -> Self {
        match err {
            ImportCheckError::BundleNotFound { .. } => Self::BundleNotFound,
            ImportCheckError::BundleParse { .. } => Self::BundleParseError,
            ImportCheckError::Messages { .. } => Self::MessagesError,
            ImportCheckError::ImportBlocked { .. } => Self::ImportBlocked,
            ImportCheckError::Config(_) => Self::ConfigError,
            ImportCheckError::Io(_) => Self::IoError,
            ImportCheckError::Json(_) => Self::JsonError,
            ImportCheckError::Yaml(_) => Self::YamlError,
            ImportCheckError::Other(_) => Self::InternalError,
        }
    }
}

/// Structured error for machine-parseable output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional hint for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Whether the operation can be retried
    pub retryable: bool,
    /// Additional context data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl StructuredError {
    /// Create a new structured error from an `ImportCheckError`.
    #[must_use]
    pub fn from_error(err: &ImportCheckError) -> Self {
        let code = ErrorCode::from(err);
        let context = match err {
            ImportCheckError::BundleNotFound { path }
            | ImportCheckError::BundleParse { path, .. }
            | ImportCheckError::Messages { path, .. } => {
                Some(json!({ "path": path.display().to_string() }))
            }
            ImportCheckError::ImportBlocked { errors } => Some(json!({ "error_count": errors })),
            _ => None,
        };

        Self {
            code,
            message: err.to_string(),
            hint: err.suggestion().map(str::to_string),
            retryable: code.is_retryable(),
            context,
        }
    }

    /// Serialize to JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                "code": self.code.as_str(),
                "message": self.message,
                "hint": self.hint,
                "retryable": self.retryable,
                "context": self.context,
            }
        })
    }

    /// Format for human-readable output.
    #[must_use]
    pub fn to_human(&self, color: bool) -> String {
        let mut output = String::new();

        if color {
            output.push_str(&format!("{} ", "Error:".red()));
        } else {
            output.push_str("Error: ");
        }
        output.push_str(&self.message);

        if let Some(hint) = &self.hint {
            output.push('\n');
            if color {
                output.push_str(&format!("{} ", "Hint:".yellow()));
            } else {
                output.push_str("Hint: ");
            }
            output.push_str(hint);
        }

        output
    }
}
