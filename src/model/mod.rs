//! Core data types for `import_mapping_check`.
//!
//! Two families of records live here:
//! - Backup-side records (`External*`, `BackupProject`) describe what the
//!   backup file defined for the project being imported. Ids are old ids.
//! - Target-side entities (`IssueType`, `Status`, `Workflow`, ...) describe
//!   what the running target system holds. Ids are new ids.
//!
//! Neither family is produced here: the backup parser and the target system
//! are external collaborators. These types only carry the fields the
//! validators read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Link style that marks the system sub-task link type.
pub const SUBTASK_LINK_STYLE: &str = "jira_subtask";

/// Role-actor type string for user members of a project role.
pub const USER_ROLE_ACTOR_TYPE: &str = "atlassian-user-role-actor";

/// Role-actor type string for group members of a project role.
pub const GROUP_ROLE_ACTOR_TYPE: &str = "atlassian-group-role-actor";

/// The project record as it appears in the backup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProject {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
}

/// A custom field definition from the backup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalCustomField {
    pub id: String,
    pub name: String,
    pub type_key: String,
}

impl ExternalCustomField {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, type_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_key: type_key.into(),
        }
    }
}

/// The configuration (context) a backup custom field had for the imported project.
///
/// `constrained_issue_type_ids` of `None` means the configuration applied to
/// every issue type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalCustomFieldConfiguration {
    #[serde(default)]
    pub constrained_issue_type_ids: Option<Vec<String>>,
    #[serde(default)]
    pub constrained_project_id: Option<String>,
    pub custom_field: ExternalCustomField,
    pub configuration_scheme_id: String,
}

impl ExternalCustomFieldConfiguration {
    #[must_use]
    pub fn new(custom_field: ExternalCustomField, configuration_scheme_id: impl Into<String>) -> Self {
        Self {
            constrained_issue_type_ids: None,
            constrained_project_id: None,
            custom_field,
            configuration_scheme_id: configuration_scheme_id.into(),
        }
    }

    /// Restrict the configuration to the given old issue type ids.
    #[must_use]
    pub fn with_issue_types<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constrained_issue_type_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Does this configuration constrain the field for `old_issue_type_id`?
    #[must_use]
    pub fn applies_to_issue_type(&self, old_issue_type_id: &str) -> bool {
        self.constrained_issue_type_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| id == old_issue_type_id))
    }
}

/// A custom field option record from the backup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalCustomFieldOption {
    pub id: String,
    pub custom_field_id: String,
    pub field_config_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub value: String,
}

impl ExternalCustomFieldOption {
    #[must_use]
    pub fn top_level(
        id: impl Into<String>,
        custom_field_id: impl Into<String>,
        field_config_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            custom_field_id: custom_field_id.into(),
            field_config_id: field_config_id.into(),
            parent_id: None,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn child_of(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Kind of member a project role actor record refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleActorKind<'a> {
    User,
    Group,
    Unknown(&'a str),
}

/// A project role membership record from the backup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProjectRoleActor {
    #[serde(default)]
    pub project_id: Option<String>,
    pub role_id: String,
    pub role_type: String,
    pub role_actor: String,
}

impl ExternalProjectRoleActor {
    #[must_use]
    pub fn user(role_id: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            project_id: None,
            role_id: role_id.into(),
            role_type: USER_ROLE_ACTOR_TYPE.to_string(),
            role_actor: user.into(),
        }
    }

    #[must_use]
    pub fn group(role_id: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            project_id: None,
            role_id: role_id.into(),
            role_type: GROUP_ROLE_ACTOR_TYPE.to_string(),
            role_actor: group.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> RoleActorKind<'_> {
        match self.role_type.as_str() {
            USER_ROLE_ACTOR_TYPE => RoleActorKind::User,
            GROUP_ROLE_ACTOR_TYPE => RoleActorKind::Group,
            other => RoleActorKind::Unknown(other),
        }
    }
}

/// A user record from the backup. Its presence means the import has enough
/// detail to create the user if the target lacks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUser {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ExternalUser {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: None,
            email: None,
        }
    }
}

/// The backup-side context for one project import attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupProject {
    pub project: ExternalProject,
    #[serde(default)]
    pub custom_field_configurations: Vec<ExternalCustomFieldConfiguration>,
    #[serde(default)]
    pub project_role_actors: Vec<ExternalProjectRoleActor>,
}

impl BackupProject {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            project: ExternalProject {
                id: String::new(),
                key: key.into(),
                name: String::new(),
            },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn project_key(&self) -> &str {
        &self.project.key
    }

    /// Configuration the backup recorded for the old custom field, if any.
    ///
    /// `None` means the field's configuration is orphaned.
    #[must_use]
    pub fn custom_field_configuration(
        &self,
        old_custom_field_id: &str,
    ) -> Option<&ExternalCustomFieldConfiguration> {
        self.custom_field_configurations
            .iter()
            .find(|config| config.custom_field.id == old_custom_field_id)
    }
}

/// Caller-supplied options for the import attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    #[serde(default)]
    pub overwrite_project_details: bool,
}

// === Target-side entities ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sub_task: bool,
}

impl IssueType {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sub_task: false,
        }
    }

    #[must_use]
    pub fn sub_task(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sub_task: true,
            ..Self::new(id, name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub name: String,
}

impl Status {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A workflow and the statuses it links.
///
/// `system_default` marks the built-in workflow, which cannot be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    #[serde(default)]
    pub linked_status_ids: Vec<String>,
    #[serde(default)]
    pub system_default: bool,
}

impl Workflow {
    #[must_use]
    pub fn uses_status(&self, status_id: &str) -> bool {
        self.linked_status_ids.iter().any(|id| id == status_id)
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            name: "jira".to_string(),
            linked_status_ids: Vec::new(),
            system_default: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub name: String,
    pub type_key: String,
}

impl CustomField {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, type_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_key: type_key.into(),
        }
    }
}

/// An installed custom field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldType {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub project_importable: bool,
}

impl CustomFieldType {
    #[must_use]
    pub fn importable(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            project_importable: true,
        }
    }
}

/// The field configuration a custom field resolves to for an issue context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldOption {
    pub id: String,
    pub custom_field_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLinkType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub style: Option<String>,
}

impl fmt::Display for IssueLinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// True when `style` is the sub-task link sentinel.
#[must_use]
pub fn is_subtask_style(style: Option<&str>) -> bool {
    style == Some(SUBTASK_LINK_STYLE)
}
