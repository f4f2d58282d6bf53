//! Message catalogues: the built-in English one and YAML overlays.

use super::{MessageResolver, keys, render};
use crate::config::flatten_yaml;
use crate::error::{ImportCheckError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const ENGLISH: &[(&str, &str)] = &[
    (
        keys::PRIORITY_DOES_NOT_EXIST,
        "The priority '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::RESOLUTION_DOES_NOT_EXIST,
        "The resolution '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::GROUP_DOES_NOT_EXIST,
        "The group '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::PROJECT_ROLE_DOES_NOT_EXIST,
        "The project role '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::SECURITY_LEVEL_DOES_NOT_EXIST,
        "The issue security level '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::SECURITY_LEVEL_ORPHAN,
        "An issue security level with id '{0}' is used by an issue in the backup but is not defined in the backup file. The security level will not be set on that issue.",
    ),
    (
        keys::CUSTOM_FIELD_DOES_NOT_EXIST,
        "The custom field '{0}' of type '{1}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::CUSTOM_FIELD_WRONG_TYPE,
        "The custom field '{0}' in the backup project is of type '{1}' but the field with the same name in the current system is of a different type.",
    ),
    (
        keys::CUSTOM_FIELD_WRONG_CONTEXT,
        "The custom field '{0}' in the backup project is used by issue types '{1}' but the field with the same name in the current system is not available to those issue types in this project.",
    ),
    (
        keys::CUSTOM_FIELD_NOT_IMPORTABLE,
        "The custom field '{0}' has a type that can not be imported into a project.",
    ),
    (
        keys::CUSTOM_FIELD_PLUGIN_MISSING,
        "The custom field '{0}' will not be imported because the plugin that provides its type '{1}' is not installed in the current system.",
    ),
    (
        keys::CUSTOM_FIELD_NOT_MAPPED,
        "The custom field '{0}' of type '{1}' is required for the import but has not been mapped.",
    ),
    (keys::NONE, "None"),
    (
        keys::OPTION_DOES_NOT_EXIST,
        "The custom field '{0}' requires option '{1}' for the import but it does not exist in the current system.",
    ),
    (
        keys::OPTION_CHILD_DOES_NOT_EXIST,
        "The custom field '{0}' requires option with parent option '{1}' and child option '{2}' for the import but it does not exist in the current system.",
    ),
    (
        keys::OPTION_WRONG_CUSTOM_FIELD,
        "The custom field '{0}' requires option '{1}' for the import but it is mapped to an option of a different custom field.",
    ),
    (
        keys::OPTION_NOT_TOP_LEVEL,
        "The custom field '{0}' requires top-level option '{1}' for the import but it is mapped to a child option in the current system.",
    ),
    (
        keys::OPTION_NOT_CHILD,
        "The custom field '{0}' requires child option '{1}' for the import but it is mapped to a top-level option in the current system.",
    ),
    (
        keys::OPTION_PARENT_NOT_MAPPED,
        "The custom field '{0}' requires option with parent option '{1}' and child option '{2}' for the import but the parent option has not been mapped.",
    ),
    (
        keys::OPTION_PARENT_INCONSISTENT,
        "The custom field '{0}' requires option with parent option '{1}' and child option '{2}' for the import but the child option belongs to a different parent option in the current system.",
    ),
    (
        keys::ISSUE_TYPE_NOT_EXISTS,
        "The issue type '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::ISSUE_TYPE_SUBTASK_NOT_EXISTS,
        "The sub-task issue type '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::ISSUE_TYPE_SUBTASK_NOT_EXISTS_SUBTASKS_DISABLED,
        "Sub-tasks are currently disabled, please enable sub-tasks. The sub-task issue type '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::ISSUE_TYPE_NOT_IN_SCHEME,
        "The issue type '{0}' exists in the system but is not valid for the projects issue type scheme.",
    ),
    (
        keys::ISSUE_TYPE_IS_SUBTASK,
        "The issue type '{0}' is defined as a normal issue type in the backup project, but it is a sub-task issue type in the current system.",
    ),
    (
        keys::ISSUE_TYPE_IS_NOT_SUBTASK,
        "The issue type '{0}' is defined as a sub-task in the backup project, but it is a normal issue type in the current system.",
    ),
    (
        keys::ISSUE_TYPE_NOT_MAPPED,
        "The issue type '{0}' is required for the import but has not been mapped.",
    ),
    (
        keys::STATUS_DOES_NOT_EXIST,
        "The status '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::STATUS_NOT_IN_DEFAULT_WORKFLOW,
        "The status '{0}' is in use by an issue of type '{1}' in the backup file. The default workflow '{2}', which is associated with issue type '{1}', does not use this status. This workflow is not editable. You must associate a workflow with issue type '{1}' that uses the status. To do this you will need to use a workflow scheme.",
    ),
    (
        keys::STATUS_NOT_IN_DEFAULT_WORKFLOW_NO_PROJECT,
        "The status '{0}' is in use by an issue of type '{1}' in the backup file. The default workflow '{2}', which is associated with issue type '{1}', does not use this status. This workflow is not editable. You must create a project with key '{3}', instead of letting the import create it for you, and associate a workflow with issue type '{1}' that uses the status. To do this you will need to use a workflow scheme.",
    ),
    (
        keys::STATUS_NOT_IN_WORKFLOW,
        "The status '{0}' is in use by an issue of type '{1}' in the backup file. The workflow '{2}', which is associated with issue type '{1}', does not use this status. You must either edit the workflow to use the status or associate a workflow with issue type '{1}' that uses the status.",
    ),
    (
        keys::STATUS_NOT_IN_WORKFLOW_NO_PROJECT,
        "The status '{0}' is in use by an issue of type '{1}' in the backup file. The workflow '{2}', which is associated with issue type '{1}', does not use this status. You must either edit the workflow to use the status or create a project with key '{3}' and associate a workflow with issue type '{1}' that uses the status.",
    ),
    (keys::WORKFLOW_HELP_LABEL, "Read the workflow documentation"),
    (
        keys::ISSUE_LINKING_DISABLED,
        "Issue linking is disabled in the current system. The project to import uses issue links, so issue linking must be enabled.",
    ),
    (
        keys::LINK_TYPE_SUBTASKS_DISABLED,
        "The project to import includes subtasks, but subtasks are disabled in the current system.",
    ),
    (
        keys::LINK_TYPE_DOES_NOT_EXIST,
        "The Issue Link Type '{0}' is required for the import but does not exist in the current system.",
    ),
    (
        keys::LINK_TYPE_STYLE_UNEXPECTED,
        "The Issue Link Type '{0}' is a normal link type in the backup project, but it has style '{1}' in the current system.",
    ),
    (
        keys::LINK_TYPE_STYLE_MISSING,
        "The Issue Link Type '{0}' has style '{1}' in the backup project, but it is a normal link type in the current system.",
    ),
    (
        keys::LINK_TYPE_STYLE_DIFFERENT,
        "The Issue Link Type '{0}' has style '{1}' in the backup project, but style '{2}' in the current system.",
    ),
    (
        keys::ROLE_ACTOR_USER_EXT_MGMT,
        "The user '{0}' is a member of the project role '{1}' in the backup project but does not exist in the current system. External user management is enabled so the import is unable to create the user. The user will not be added to the project role.",
    ),
    (
        keys::ROLE_ACTOR_USER,
        "The user '{0}' is a member of the project role '{1}' in the backup project but does not exist in the current system and can not be created by the import. The user will not be added to the project role.",
    ),
    (
        keys::ROLE_ACTOR_GROUP,
        "The group '{0}' is a member of the project role '{1}' in the backup project but does not exist in the current system. The group will not be added to the project role.",
    ),
    (
        keys::ROLE_ACTOR_UNKNOWN_TYPE,
        "The member '{0}' of the project role '{1}' has the unknown type '{2}' and will not be added to the project role.",
    ),
    (
        keys::USERS_EXT_MGMT_MISSING_MANDATORY,
        "There are {0} required user(s) that are missing from the current system. External user management is enabled so the import is unable to create the user(s). You must add the user(s) to the system before the import can proceed. Click the 'View Details' link to see a full list of user(s) that are required.",
    ),
    (
        keys::USERS_EXT_MGMT_MISSING_OPTIONAL,
        "There are '{0}' user(s) referenced that are in use in the project and missing from the current system. External user management is enabled so the import is unable to create the user(s). You may want to add the user(s) to the system before performing the import but the import can proceed without them. Click the 'View Details' link to see a full list of user(s) that are in use.",
    ),
    (
        keys::USERS_MISSING_MANDATORY_CANNOT_CREATE,
        "There are '{0}' required user(s) that the import can not automatically create.",
    ),
    (
        keys::USERS_MISSING_OPTIONAL_CANNOT_CREATE,
        "There are '{0}' user(s) referenced that the import can not automatically create. You may want to create these users before performing the import.",
    ),
    (
        keys::USERS_WILL_BE_CREATED,
        "There are '{0}' users that will be automatically created if the import continues.",
    ),
    (keys::USERS_VIEW_DETAILS, "View Details"),
    (keys::SECTION_ISSUE_TYPE, "Issue Type"),
    (keys::SECTION_CUSTOM_FIELD, "Custom Field Configuration"),
    (keys::SECTION_STATUS, "Status"),
    (keys::SECTION_PRIORITY, "Priority"),
    (keys::SECTION_RESOLUTION, "Resolution"),
    (keys::SECTION_USERS, "Users"),
    (keys::SECTION_PROJECT_ROLE, "Project Role"),
    (keys::SECTION_PROJECT_ROLE_MEMBERSHIP, "Project Role Membership"),
    (keys::SECTION_GROUP, "Group"),
    (keys::SECTION_ISSUE_LINK_TYPE, "Issue Link Type"),
    (keys::SECTION_SECURITY_LEVEL, "Issue Security Level"),
];

static ENGLISH_CATALOG: LazyLock<MessageCatalog> = LazyLock::new(|| MessageCatalog {
    templates: ENGLISH
        .iter()
        .map(|(key, template)| ((*key).to_string(), (*template).to_string()))
        .collect(),
});

/// Key → template map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    templates: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// The built-in English catalogue.
    #[must_use]
    pub fn english() -> &'static Self {
        &ENGLISH_CATALOG
    }

    /// Parse a YAML catalogue and overlay it on the English one.
    ///
    /// Nested maps are flattened into dotted keys, so both
    /// `admin.errors.x: "..."` and `admin: {errors: {x: "..."}}` work.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(contents)?;
        let mut templates = ENGLISH_CATALOG.templates.clone();
        let mut overlay = BTreeMap::new();
        flatten_yaml(&value, "", &mut overlay);
        templates.extend(overlay);
        Ok(Self { templates })
    }

    /// Load a YAML catalogue file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ImportCheckError::Messages {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    #[must_use]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    /// Every key and template, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl MessageResolver for MessageCatalog {
    fn resolve(&self, key: &str, args: &[String]) -> String {
        match self.template(key) {
            Some(template) => render(template, args),
            None => {
                let mut text = key.to_string();
                for arg in args {
                    text.push_str(&format!(" [{arg}]"));
                }
                text
            }
        }
    }
}
