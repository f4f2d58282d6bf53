//! Shared utilities for `import_mapping_check`.

mod hash;

pub use hash::{Fingerprint, report_fingerprint};
