//! JSON report for a `MappingResult`.

use crate::pipeline::MappingResult;
use crate::util::Fingerprint;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Envelope printed by `imc check --json`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub project: &'a str,
    pub can_import: bool,
    pub error_count: usize,
    pub warning_count: usize,
    /// SHA256 over the result; equal for identical runs.
    pub fingerprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    pub result: &'a MappingResult,
}

impl<'a> JsonReport<'a> {
    #[must_use]
    pub fn new(project: &'a str, result: &'a MappingResult) -> Self {
        Self {
            project,
            can_import: result.can_import(),
            error_count: result.error_count(),
            warning_count: result.warning_count(),
            fingerprint: result.fingerprint(),
            generated_at: None,
            result,
        }
    }

    #[must_use]
    pub const fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }
}
