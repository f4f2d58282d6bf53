//! Validation bundles: everything one check needs, in a single file.
//!
//! A bundle carries the backup context, import options, the mapping tables
//! the automapper produced, and a snapshot of the target system. Files ending
//! in `.yaml` or `.yml` are read as YAML; anything else as JSON.

use crate::error::{ImportCheckError, Result};
use crate::i18n::Localizer;
use crate::lookup::TargetSnapshot;
use crate::mapping::ProjectImportMapper;
use crate::model::{BackupProject, ImportOptions};
use crate::pipeline::{self, MappingResult};
use crate::validation::ProjectImportValidators;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationBundle {
    pub backup: BackupProject,
    #[serde(default)]
    pub options: ImportOptions,
    #[serde(default)]
    pub mappings: ProjectImportMapper,
    #[serde(default)]
    pub target: TargetSnapshot,
}

/// On-disk encoding of a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleFormat {
    Json,
    Yaml,
}

impl BundleFormat {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl ValidationBundle {
    /// Load a bundle file.
    ///
    /// # Errors
    ///
    /// Returns `BundleNotFound` if the file does not exist, `BundleParse` if
    /// its contents do not describe a bundle.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ImportCheckError::BundleNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let format = BundleFormat::from_path(path);
        debug!(path = %path.display(), ?format, bytes = contents.len(), "Loading bundle");
        Self::parse(&contents, format)
            .map_err(|reason| ImportCheckError::bundle_parse(path, reason))
    }

    /// Parse bundle text, returning the parser's message on failure.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON or YAML error text.
    pub fn parse(contents: &str, format: BundleFormat) -> std::result::Result<Self, String> {
        match format {
            BundleFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            BundleFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Run the full validation pipeline over this bundle.
    #[must_use]
    pub fn validate(
        &self,
        validators: &ProjectImportValidators,
        localizer: &Localizer<'_>,
    ) -> MappingResult {
        pipeline::run(
            &self.backup,
            &self.options,
            &self.mappings,
            &self.target,
            validators,
            localizer,
        )
    }
}
