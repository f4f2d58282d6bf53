//! Report fingerprinting.
//!
//! Uses SHA256 over the result's sections in presentation order, with null
//! separators between fields. Two runs over identical inputs hash the same.

use sha2::{Digest, Sha256};

use crate::diagnostics::Diagnostics;
use crate::pipeline::MappingResult;

/// Trait for types that can produce a deterministic fingerprint.
pub trait Fingerprint {
    fn fingerprint(&self) -> String;
}

impl Fingerprint for MappingResult {
    fn fingerprint(&self) -> String {
        report_fingerprint(self)
    }
}

/// Compute the SHA256 fingerprint of a validation result.
///
/// Fields included (stable order with null separators):
/// - section title key and localized title
/// - a `checked` / `skipped` marker
/// - per message: severity, key, each argument, text
///
/// Link URLs are excluded so a reconfigured help page does not change the
/// fingerprint.
#[must_use]
pub fn report_fingerprint(result: &MappingResult) -> String {
    let mut hasher = Sha256::new();

    let mut add_field = |value: &str| {
        if value.contains('\0') {
            hasher.update(value.replace('\0', " ").as_bytes());
        } else {
            hasher.update(value.as_bytes());
        }
        hasher.update(b"\x00");
    };

    for section in &result.system_fields {
        add_field(&section.title_key);
        add_field(&section.title);
        add_diagnostics(&mut add_field, section.diagnostics.as_ref());
    }
    for section in &result.custom_field_values {
        add_field(&section.custom_field_id);
        add_field(&section.name);
        add_diagnostics(&mut add_field, section.diagnostics.as_ref());
    }

    format!("{:x}", hasher.finalize())
}

fn add_diagnostics(add_field: &mut impl FnMut(&str), diagnostics: Option<&Diagnostics>) {
    let Some(diagnostics) = diagnostics else {
        add_field("skipped");
        return;
    };
    add_field("checked");
    for (severity, message) in diagnostics.iter() {
        add_field(severity.as_str());
        add_field(&message.key);
        for arg in &message.args {
            add_field(arg);
        }
        add_field(&message.text);
    }
}
