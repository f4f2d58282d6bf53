//! Mapping tables for issue constants: issue types, statuses, link types.

use super::MappingTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Deref, DerefMut};

/// Issue type mapping, remembering which old types were sub-task types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTypeMapping {
    #[serde(flatten)]
    table: MappingTable,
    #[serde(default)]
    sub_tasks: BTreeSet<String>,
}

impl IssueTypeMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_issue_type(
        &mut self,
        old_id: impl Into<String>,
        name: impl Into<String>,
        sub_task: bool,
    ) {
        let old_id = old_id.into();
        if sub_task {
            self.sub_tasks.insert(old_id.clone());
        } else {
            self.sub_tasks.remove(&old_id);
        }
        self.table.register_old_value(old_id, name);
    }

    #[must_use]
    pub fn is_sub_task(&self, old_id: &str) -> bool {
        self.sub_tasks.contains(old_id)
    }
}

impl Deref for IssueTypeMapping {
    type Target = MappingTable;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl DerefMut for IssueTypeMapping {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.table
    }
}

/// Status mapping, remembering which old issue types use each status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMapping {
    #[serde(flatten)]
    table: MappingTable,
    #[serde(default)]
    issue_types: BTreeMap<String, BTreeSet<String>>,
}

impl StatusMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag `old_status_id` as required by an issue of `old_issue_type_id`.
    pub fn flag_required_for_issue_type(
        &mut self,
        old_status_id: impl Into<String>,
        old_issue_type_id: impl Into<String>,
    ) {
        let old_status_id = old_status_id.into();
        self.issue_types
            .entry(old_status_id.clone())
            .or_default()
            .insert(old_issue_type_id.into());
        self.table.flag_as_required(old_status_id);
    }

    /// Old issue type ids that use `old_status_id`, ascending.
    pub fn issue_type_ids_for_required_status(
        &self,
        old_status_id: &str,
    ) -> impl Iterator<Item = &str> {
        self.issue_types
            .get(old_status_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

impl Deref for StatusMapping {
    type Target = MappingTable;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl DerefMut for StatusMapping {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.table
    }
}

/// Issue link type mapping with the backup's link style per type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLinkTypeMapping {
    #[serde(flatten)]
    table: MappingTable,
    #[serde(default)]
    styles: BTreeMap<String, String>,
}

impl IssueLinkTypeMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_link_type(
        &mut self,
        old_id: impl Into<String>,
        name: impl Into<String>,
        style: Option<&str>,
    ) {
        let old_id = old_id.into();
        match style {
            Some(style) => {
                self.styles.insert(old_id.clone(), style.to_string());
            }
            None => {
                self.styles.remove(&old_id);
            }
        }
        self.table.register_old_value(old_id, name);
    }

    /// Style of the old link type; `None` for normal links.
    #[must_use]
    pub fn style(&self, old_id: &str) -> Option<&str> {
        self.styles.get(old_id).map(String::as_str)
    }
}

impl Deref for IssueLinkTypeMapping {
    type Target = MappingTable;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

impl DerefMut for IssueLinkTypeMapping {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.table
    }
}
