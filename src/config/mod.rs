//! Configuration management for `import_mapping_check`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides
//! 2. Environment variables (`IMC_*`)
//! 3. Project config (.imc/config.yaml, or the file given with `--config`)
//! 4. User config (~/.config/imc/config.yaml)
//! 5. Defaults
//!
//! Keys are dotted paths (`links.users.auto-create`). Lookups ignore the
//! difference between `.`, `_` and `-`, so `IMC_LINKS_USERS_AUTO_CREATE`
//! addresses the same key.

use crate::error::{ImportCheckError, Result};
use crate::validation::UserLinks;
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "IMC_";
/// Directory holding the project config file.
const PROJECT_CONFIG_DIR: &str = ".imc";
const CONFIG_FILENAME: &str = "config.yaml";

/// Default target of the status validator's help link.
pub const DEFAULT_WORKFLOW_HELP_URL: &str = "secure/admin/ListWorkflows.jspa";

pub const KEY_WORKFLOW_HELP: &str = "links.workflow-help";
pub const KEY_USERS_EXT_MGMT_MANDATORY: &str = "links.users.ext-mgmt-mandatory";
pub const KEY_USERS_EXT_MGMT_OPTIONAL: &str = "links.users.ext-mgmt-optional";
pub const KEY_USERS_CANNOT_CREATE_MANDATORY: &str = "links.users.cannot-create-mandatory";
pub const KEY_USERS_CANNOT_CREATE_OPTIONAL: &str = "links.users.cannot-create-optional";
pub const KEY_USERS_AUTO_CREATE: &str = "links.users.auto-create";
pub const KEY_MESSAGES_FILE: &str = "messages.file";
pub const KEY_OUTPUT_JSON: &str = "output.json";

const KNOWN_KEYS: [&str; 8] = [
    KEY_WORKFLOW_HELP,
    KEY_USERS_EXT_MGMT_MANDATORY,
    KEY_USERS_EXT_MGMT_OPTIONAL,
    KEY_USERS_CANNOT_CREATE_MANDATORY,
    KEY_USERS_CANNOT_CREATE_OPTIONAL,
    KEY_USERS_AUTO_CREATE,
    KEY_MESSAGES_FILE,
    KEY_OUTPUT_JSON,
];

/// One configuration source, flattened to `key -> value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    values: BTreeMap<String, String>,
}

impl ConfigLayer {
    /// Set a key, replacing any value stored under an equivalent spelling.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(normalize_key(key), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&normalize_key(key)).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge another layer on top of this one (higher precedence wins).
    pub fn merge_from(&mut self, other: &Self) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Merge multiple layers in precedence order (lowest to highest).
    #[must_use]
    pub fn merge_layers(layers: &[Self]) -> Self {
        let mut merged = Self::default();
        for layer in layers {
            merged.merge_from(layer);
        }
        merged
    }

    /// Build a layer from a YAML file path. Missing files return empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Build a layer from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(contents)?;
        let mut flat = BTreeMap::new();
        flatten_yaml(&value, "", &mut flat);

        let mut layer = Self::default();
        for (key, value) in flat {
            layer.insert(&key, value);
        }
        Ok(layer)
    }

    /// Build a layer from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_vars(env::vars())
    }

    /// Build a layer from `IMC_`-prefixed variables; others are ignored.
    #[must_use]
    pub fn from_env_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut layer = Self::default();
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(ENV_PREFIX) {
                layer.insert(stripped, value);
            }
        }
        layer
    }
}

/// CLI overrides for config loading (optional).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub messages: Option<PathBuf>,
    pub json: Option<bool>,
    pub workflow_help: Option<String>,
}

impl CliOverrides {
    #[must_use]
    pub fn as_layer(&self) -> ConfigLayer {
        let mut layer = ConfigLayer::default();

        if let Some(path) = &self.messages {
            layer.insert(KEY_MESSAGES_FILE, path.to_string_lossy());
        }
        if let Some(json) = self.json {
            layer.insert(KEY_OUTPUT_JSON, json.to_string());
        }
        if let Some(url) = &self.workflow_help {
            layer.insert(KEY_WORKFLOW_HELP, url.clone());
        }

        layer
    }
}

/// Load project config (.imc/config.yaml under `dir`).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(dir: &Path) -> Result<ConfigLayer> {
    ConfigLayer::from_yaml(&dir.join(PROJECT_CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load user config (~/.config/imc/config.yaml).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<ConfigLayer> {
    let Ok(home) = env::var("HOME") else {
        return Ok(ConfigLayer::default());
    };
    let path = Path::new(&home)
        .join(".config")
        .join("imc")
        .join(CONFIG_FILENAME);
    ConfigLayer::from_yaml(&path)
}

/// Default config layer (lowest precedence).
#[must_use]
pub fn default_config_layer() -> ConfigLayer {
    let links = UserLinks::default();
    let mut layer = ConfigLayer::default();
    layer.insert(KEY_WORKFLOW_HELP, DEFAULT_WORKFLOW_HELP_URL);
    layer.insert(KEY_USERS_EXT_MGMT_MANDATORY, links.ext_mgmt_mandatory);
    layer.insert(KEY_USERS_EXT_MGMT_OPTIONAL, links.ext_mgmt_optional);
    layer.insert(KEY_USERS_CANNOT_CREATE_MANDATORY, links.cannot_create_mandatory);
    layer.insert(KEY_USERS_CANNOT_CREATE_OPTIONAL, links.cannot_create_optional);
    layer.insert(KEY_USERS_AUTO_CREATE, links.auto_create);
    layer.insert(KEY_OUTPUT_JSON, "false");
    layer
}

/// Load configuration with the full precedence chain.
///
/// An explicit `config_file` replaces the project config and must exist.
///
/// # Errors
///
/// Returns an error if any config file cannot be read or parsed, or the
/// explicit file is missing.
pub fn load_config(
    dir: &Path,
    config_file: Option<&Path>,
    cli: &CliOverrides,
) -> Result<ConfigLayer> {
    let project = match config_file {
        Some(path) if !path.exists() => {
            return Err(ImportCheckError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => ConfigLayer::from_yaml(path)?,
        None => load_project_config(dir)?,
    };

    Ok(ConfigLayer::merge_layers(&[
        default_config_layer(),
        load_user_config()?,
        project,
        ConfigLayer::from_env(),
        cli.as_layer(),
    ]))
}

/// Settings the validators and the CLI read from the merged configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSettings {
    pub workflow_help_url: String,
    pub user_links: UserLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages_file: Option<PathBuf>,
    pub json: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            workflow_help_url: DEFAULT_WORKFLOW_HELP_URL.to_string(),
            user_links: UserLinks::default(),
            messages_file: None,
            json: false,
        }
    }
}

impl ValidationSettings {
    /// Resolve settings from a merged layer. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `output.json` is not a boolean.
    pub fn from_layer(layer: &ConfigLayer) -> Result<Self> {
        for (key, _) in layer.iter() {
            if !KNOWN_KEYS.iter().any(|known| normalize_key(known) == key) {
                warn!(key, "Ignoring unknown configuration key");
            }
        }

        let mut settings = Self::default();
        let text = |key: &str| {
            layer
                .get(key)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        if let Some(url) = text(KEY_WORKFLOW_HELP) {
            settings.workflow_help_url = url;
        }
        let links = &mut settings.user_links;
        for (key, slot) in [
            (KEY_USERS_EXT_MGMT_MANDATORY, &mut links.ext_mgmt_mandatory),
            (KEY_USERS_EXT_MGMT_OPTIONAL, &mut links.ext_mgmt_optional),
            (KEY_USERS_CANNOT_CREATE_MANDATORY, &mut links.cannot_create_mandatory),
            (KEY_USERS_CANNOT_CREATE_OPTIONAL, &mut links.cannot_create_optional),
            (KEY_USERS_AUTO_CREATE, &mut links.auto_create),
        ] {
            if let Some(url) = text(key) {
                *slot = url;
            }
        }
        settings.messages_file = text(KEY_MESSAGES_FILE).map(PathBuf::from);
        if let Some(raw) = text(KEY_OUTPUT_JSON) {
            settings.json = parse_bool(&raw).ok_or_else(|| {
                ImportCheckError::Config(format!("{KEY_OUTPUT_JSON} must be a boolean, got '{raw}'"))
            })?;
        }

        Ok(settings)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(['_', '.'], "-")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Flatten nested YAML maps into dotted keys; sequences become CSV.
pub(crate) fn flatten_yaml(
    value: &serde_yaml::Value,
    prefix: &str,
    out: &mut BTreeMap<String, String>,
) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, value) in map {
                let Some(key_str) = key.as_str() else {
                    continue;
                };
                let next_prefix = if prefix.is_empty() {
                    key_str.to_string()
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml(value, &next_prefix, out);
            }
        }
        serde_yaml::Value::Sequence(values) => {
            let joined = values
                .iter()
                .filter_map(yaml_scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.insert(prefix.to_string(), joined);
        }
        _ => {
            if let Some(value) = yaml_scalar_to_string(value) {
                out.insert(prefix.to_string(), value);
            }
        }
    }
}

fn yaml_scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Bool(v) => Some(v.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Null
        | serde_yaml::Value::Sequence(_)
        | serde_yaml::Value::Mapping(_) => None,
        serde_yaml::Value::Tagged(tagged) => yaml_scalar_to_string(&tagged.value),
    }
}
