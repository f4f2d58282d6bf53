//! Old-id → new-id mapping tables.
//!
//! One table exists per entity type. The automapper (an external
//! collaborator) fills them in before validation; validators only read them.
//!
//! A table tracks four relations for old ids:
//! - `mapped`: old id → new id. Absent means "not mapped".
//! - `registered`: old id → key (the lookup name). Absent means the backup
//!   never defined the id, i.e. the id is orphan data.
//! - `display_names`: optional human label; falls back to the key.
//! - `required`: ids actually referenced by data being imported.

mod constants;
mod custom_field;
mod user;

pub use constants::{IssueLinkTypeMapping, IssueTypeMapping, StatusMapping};
pub use custom_field::{CustomFieldMapping, CustomFieldOptionMapping};
pub use user::UserMapping;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Scalar old → new mapping table shared by every entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTable {
    #[serde(default)]
    mapped: BTreeMap<String, String>,
    #[serde(default)]
    registered: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    display_names: BTreeMap<String, String>,
    #[serde(default)]
    required: BTreeSet<String>,
}

impl MappingTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the backup defined `old_id` with lookup key `key`.
    pub fn register_old_value(&mut self, old_id: impl Into<String>, key: impl Into<String>) {
        self.registered.insert(old_id.into(), key.into());
    }

    /// Record a definition whose display label differs from its key.
    pub fn register_old_value_with_name(
        &mut self,
        old_id: impl Into<String>,
        key: impl Into<String>,
        display_name: impl Into<String>,
    ) {
        let old_id = old_id.into();
        self.display_names.insert(old_id.clone(), display_name.into());
        self.registered.insert(old_id, key.into());
    }

    /// Mark `old_id` as referenced by data being imported.
    pub fn flag_as_required(&mut self, old_id: impl Into<String>) {
        self.required.insert(old_id.into());
    }

    pub fn map_value(&mut self, old_id: impl Into<String>, new_id: impl Into<String>) {
        self.mapped.insert(old_id.into(), new_id.into());
    }

    #[must_use]
    pub fn mapped_id(&self, old_id: &str) -> Option<&str> {
        self.mapped.get(old_id).map(String::as_str)
    }

    /// The key registered for `old_id`; `None` marks orphan data.
    #[must_use]
    pub fn key(&self, old_id: &str) -> Option<&str> {
        self.registered.get(old_id).map(String::as_str)
    }

    /// Label for messages: display name, else key, else the bracketed id.
    #[must_use]
    pub fn display_name(&self, old_id: &str) -> String {
        self.display_names
            .get(old_id)
            .or_else(|| self.registered.get(old_id))
            .cloned()
            .unwrap_or_else(|| format!("[{old_id}]"))
    }

    #[must_use]
    pub fn is_required(&self, old_id: &str) -> bool {
        self.required.contains(old_id)
    }

    #[must_use]
    pub fn is_registered(&self, old_id: &str) -> bool {
        self.registered.contains_key(old_id)
    }

    /// Required ids in ascending order.
    pub fn required_old_ids(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    /// Every id the backup defined, in ascending order.
    pub fn registered_old_ids(&self) -> impl Iterator<Item = &str> {
        self.registered.keys().map(String::as_str)
    }

    #[must_use]
    pub fn has_registered_values(&self) -> bool {
        !self.registered.is_empty()
    }
}

/// Every mapping table for one import attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImportMapper {
    #[serde(default)]
    pub issue_types: IssueTypeMapping,
    #[serde(default)]
    pub statuses: StatusMapping,
    #[serde(default)]
    pub custom_fields: CustomFieldMapping,
    #[serde(default)]
    pub custom_field_options: CustomFieldOptionMapping,
    #[serde(default)]
    pub priorities: MappingTable,
    #[serde(default)]
    pub resolutions: MappingTable,
    #[serde(default)]
    pub groups: MappingTable,
    #[serde(default)]
    pub project_roles: MappingTable,
    #[serde(default)]
    pub security_levels: MappingTable,
    #[serde(default)]
    pub issue_link_types: IssueLinkTypeMapping,
    #[serde(default)]
    pub users: UserMapping,
}
