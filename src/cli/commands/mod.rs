//! Command implementations.

pub mod check;
pub mod config;
pub mod messages;
pub mod version;

use crate::config::{CliOverrides, ConfigLayer, ValidationSettings, load_config};
use crate::error::Result;
use crate::i18n::MessageCatalog;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::debug;

/// Resolved state every command starts from.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub layer: ConfigLayer,
    pub settings: ValidationSettings,
    pub json: bool,
    pub quiet: bool,
    pub use_color: bool,
}

impl CommandContext {
    /// Load configuration for a command run from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is unreadable or a value is invalid.
    pub fn load(
        dir: &Path,
        config_file: Option<&Path>,
        overrides: &CliOverrides,
        quiet: bool,
        no_color: bool,
    ) -> Result<Self> {
        let layer = load_config(dir, config_file, overrides)?;
        let settings = ValidationSettings::from_layer(&layer)?;
        debug!(?settings, "Resolved validation settings");
        Ok(Self {
            json: settings.json,
            layer,
            settings,
            quiet,
            use_color: !no_color && io::stdout().is_terminal(),
        })
    }

    /// The configured message catalogue, or English.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalogue cannot be loaded.
    pub fn catalog(&self) -> Result<MessageCatalog> {
        match &self.settings.messages_file {
            Some(path) => MessageCatalog::from_yaml_file(path),
            None => Ok(MessageCatalog::english().clone()),
        }
    }
}
