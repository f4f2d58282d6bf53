//! `import_mapping_check`: validate project-import id mappings.
//!
//! Before a project backup is imported into a live issue tracker, every old
//! id the backup references (issue types, statuses, custom fields and their
//! options, priorities, users, ...) must map to something valid in the
//! target. This crate checks those mappings and reports, per entity type,
//! the errors that block the import and the warnings that degrade it.
//!
//! The engine is pure: validators read mapping tables and a
//! [`lookup::TargetSystem`] and return [`diagnostics::Diagnostics`]. The
//! [`pipeline`] runs them in order, and [`bundle`] loads everything from one
//! file for the `imc` binary.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod lookup;
pub mod mapping;
pub mod model;
pub mod pipeline;
pub mod util;
pub mod validation;

pub use error::{ErrorCode, ImportCheckError, Result, StructuredError};
