//! Mapping tables for custom fields and their options.

use super::MappingTable;
use crate::model::ExternalCustomFieldOption;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Deref, DerefMut};

/// Custom field mapping, remembering the issue types each field is required for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldMapping {
    #[serde(flatten)]
    table: MappingTable,
    #[serde(default)]
    issue_types: BTreeMap<String, BTreeSet<String>>,
}

impl CustomFieldMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag `old_field_id` as required by an issue of `old_issue_type_id`.
    pub fn flag_required_for_issue_type(
        &mut self,
        old_field_id: impl Into<String>,
        old_issue_type_id: impl Into<String>,
    ) {
        let old_field_id = old_field_id.into();
        self.issue_types
            .entry(old_field_id.clone())
            .or_default()
            .insert(old_issue_type_id.into());
        self.table.flag_as_required(old_field_id);
    }

    /// Old issue type ids for which `old_field_id` is required, ascending.
    pub fn issue_type_ids_for_required_custom_field(
        &self,
        old_field_id: &str,
    ) -> impl Iterator<Item = &str> {
        self.issue_types
            .get(old_field_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

impl Deref for CustomFieldMapping {
    type Target = MappingTable;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl DerefMut for CustomFieldMapping {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.table
    }
}

/// Custom field option mapping holding the backup's option records.
///
/// An option id with no record is orphan data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldOptionMapping {
    #[serde(flatten)]
    table: MappingTable,
    #[serde(default)]
    options: BTreeMap<String, ExternalCustomFieldOption>,
}

impl CustomFieldOptionMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backup option; its value becomes the table key.
    pub fn register_option(&mut self, option: ExternalCustomFieldOption) {
        self.table
            .register_old_value(option.id.clone(), option.value.clone());
        self.options.insert(option.id.clone(), option);
    }

    #[must_use]
    pub fn option(&self, old_id: &str) -> Option<&ExternalCustomFieldOption> {
        self.options.get(old_id)
    }

    /// Parent record of a child option, if the option and its parent are known.
    #[must_use]
    pub fn parent_of(&self, old_id: &str) -> Option<&ExternalCustomFieldOption> {
        self.option(old_id)
            .and_then(|option| option.parent_id.as_deref())
            .and_then(|parent_id| self.option(parent_id))
    }
}

impl Deref for CustomFieldOptionMapping {
    type Target = MappingTable;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl DerefMut for CustomFieldOptionMapping {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.table
    }
}
