//! Output formatting for `import_mapping_check`.
//!
//! Supports human-readable text and machine-parseable JSON. Reports go to
//! stdout; logs and errors go to stderr.

mod json;
mod text;

pub use json::JsonReport;
pub use text::{
    TextFormatOptions, format_mapping_result, format_message_line, format_section_status,
    format_verdict,
};
