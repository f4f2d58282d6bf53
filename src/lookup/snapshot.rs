//! In-memory target state loaded from a bundle file.

use super::{
    ConstantsLookup, CustomFieldLookup, IssueLinkLookup, ProjectLookup, UserLookup, WorkflowLookup,
};
use crate::model::{
    CustomField, CustomFieldOption, CustomFieldType, FieldConfig, IssueLinkType, IssueType,
    Project, Status, Workflow,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

const fn default_true() -> bool {
    true
}

/// A project that already exists in the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(flatten)]
    pub project: Project,
    /// Issue type ids in the project's scheme; `None` uses the default scheme.
    #[serde(default)]
    pub issue_type_scheme: Option<Vec<String>>,
    /// Issue type id → workflow name.
    #[serde(default)]
    pub workflow_scheme: BTreeMap<String, String>,
    /// Workflow for issue types the scheme does not name.
    #[serde(default)]
    pub default_workflow: Option<String>,
}

impl ProjectSnapshot {
    #[must_use]
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            project: Project {
                id: id.into(),
                key: key.into(),
                name: String::new(),
            },
            issue_type_scheme: None,
            workflow_scheme: BTreeMap::new(),
            default_workflow: None,
        }
    }
}

/// A custom field context: where a field configuration applies.
///
/// `None` for either list means "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldContext {
    pub custom_field_id: String,
    pub field_config_id: String,
    #[serde(default)]
    pub project_ids: Option<Vec<String>>,
    #[serde(default)]
    pub issue_type_ids: Option<Vec<String>>,
}

impl FieldContext {
    #[must_use]
    pub fn global(custom_field_id: impl Into<String>, field_config_id: impl Into<String>) -> Self {
        Self {
            custom_field_id: custom_field_id.into(),
            field_config_id: field_config_id.into(),
            project_ids: None,
            issue_type_ids: None,
        }
    }

    #[must_use]
    pub fn for_projects<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.project_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn for_issue_types<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.issue_type_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    fn covers_issue_type(&self, issue_type_id: &str) -> bool {
        self.issue_type_ids
            .as_ref()
            .is_none_or(|ids| ids.iter().any(|id| id == issue_type_id))
    }

    fn names_project(&self, project_id: &str) -> bool {
        self.project_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == project_id))
    }
}

/// Serializable snapshot of everything the validators ask the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSnapshot {
    #[serde(default)]
    pub issue_types: Vec<IssueType>,
    #[serde(default)]
    pub statuses: Vec<Status>,
    #[serde(default = "default_true")]
    pub sub_tasks_enabled: bool,
    #[serde(default)]
    pub projects: Vec<ProjectSnapshot>,
    /// Issue type ids in the default scheme; `None` means every issue type.
    #[serde(default)]
    pub default_issue_type_scheme: Option<Vec<String>>,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    #[serde(default)]
    pub default_workflow: Workflow,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub custom_field_types: Vec<CustomFieldType>,
    #[serde(default)]
    pub field_contexts: Vec<FieldContext>,
    #[serde(default)]
    pub options: Vec<CustomFieldOption>,
    #[serde(default)]
    pub issue_link_types: Vec<IssueLinkType>,
    #[serde(default = "default_true")]
    pub issue_linking_enabled: bool,
    #[serde(default)]
    pub users: BTreeSet<String>,
    #[serde(default)]
    pub external_user_management: bool,
}

impl Default for TargetSnapshot {
    fn default() -> Self {
        Self {
            issue_types: Vec::new(),
            statuses: Vec::new(),
            sub_tasks_enabled: true,
            projects: Vec::new(),
            default_issue_type_scheme: None,
            workflows: Vec::new(),
            default_workflow: Workflow::default(),
            custom_fields: Vec::new(),
            custom_field_types: Vec::new(),
            field_contexts: Vec::new(),
            options: Vec::new(),
            issue_link_types: Vec::new(),
            issue_linking_enabled: true,
            users: BTreeSet::new(),
            external_user_management: false,
        }
    }
}

impl TargetSnapshot {
    fn project(&self, key: &str) -> Option<&ProjectSnapshot> {
        self.projects.iter().find(|p| p.project.key == key)
    }

    fn workflow_named(&self, name: &str) -> Option<&Workflow> {
        if self.default_workflow.name == name {
            return Some(&self.default_workflow);
        }
        self.workflows.iter().find(|w| w.name == name)
    }
}

impl ConstantsLookup for TargetSnapshot {
    fn issue_type(&self, id: &str) -> Option<IssueType> {
        self.issue_types.iter().find(|t| t.id == id).cloned()
    }

    fn issue_type_by_name(&self, name: &str) -> Option<IssueType> {
        self.issue_types
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    fn status(&self, id: &str) -> Option<Status> {
        self.statuses.iter().find(|s| s.id == id).cloned()
    }

    fn status_by_name(&self, name: &str) -> Option<Status> {
        self.statuses
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    fn is_sub_tasks_enabled(&self) -> bool {
        self.sub_tasks_enabled
    }
}

impl ProjectLookup for TargetSnapshot {
    fn project_by_key(&self, key: &str) -> Option<Project> {
        self.project(key).map(|p| p.project.clone())
    }

    fn is_issue_type_valid_for_project(&self, project_key: &str, issue_type_id: &str) -> bool {
        let scheme = self
            .project(project_key)
            .and_then(|p| p.issue_type_scheme.as_ref())
            .or(self.default_issue_type_scheme.as_ref());
        scheme.is_none_or(|ids| ids.iter().any(|id| id == issue_type_id))
    }
}

impl WorkflowLookup for TargetSnapshot {
    fn workflow_for(&self, project_key: &str, issue_type_id: &str) -> Workflow {
        let Some(project) = self.project(project_key) else {
            return self.default_workflow.clone();
        };
        let Some(name) = project
            .workflow_scheme
            .get(issue_type_id)
            .or(project.default_workflow.as_ref())
        else {
            return self.default_workflow.clone();
        };
        // An unregistered workflow keeps its name but links no statuses.
        self.workflow_named(name).cloned().unwrap_or_else(|| {
            warn!(
                project_key,
                workflow = %name,
                "Workflow scheme names a workflow missing from the snapshot"
            );
            Workflow {
                name: name.clone(),
                linked_status_ids: Vec::new(),
                system_default: false,
            }
        })
    }

    fn default_workflow(&self) -> Workflow {
        self.default_workflow.clone()
    }
}

impl CustomFieldLookup for TargetSnapshot {
    fn custom_field(&self, id: &str) -> Option<CustomField> {
        self.custom_fields.iter().find(|f| f.id == id).cloned()
    }

    fn custom_field_type(&self, key: &str) -> Option<CustomFieldType> {
        self.custom_field_types.iter().find(|t| t.key == key).cloned()
    }

    fn custom_fields_by_name(&self, name: &str) -> Vec<CustomField> {
        self.custom_fields
            .iter()
            .filter(|f| f.name == name)
            .cloned()
            .collect()
    }

    fn field_config_for(
        &self,
        custom_field_id: &str,
        project_id: Option<&str>,
        issue_type_id: &str,
    ) -> Option<FieldConfig> {
        let candidates = self
            .field_contexts
            .iter()
            .filter(|c| c.custom_field_id == custom_field_id && c.covers_issue_type(issue_type_id));

        // A project-specific context shadows the global one.
        let mut global = None;
        for context in candidates {
            match (project_id, &context.project_ids) {
                (Some(project_id), Some(_)) if context.names_project(project_id) => {
                    return Some(FieldConfig {
                        id: context.field_config_id.clone(),
                    });
                }
                (_, None) if global.is_none() => global = Some(context),
                _ => {}
            }
        }
        global.map(|c| FieldConfig {
            id: c.field_config_id.clone(),
        })
    }

    fn option(&self, id: &str) -> Option<CustomFieldOption> {
        self.options.iter().find(|o| o.id == id).cloned()
    }
}

impl IssueLinkLookup for TargetSnapshot {
    fn issue_link_type(&self, id: &str) -> Option<IssueLinkType> {
        self.issue_link_types.iter().find(|l| l.id == id).cloned()
    }

    fn issue_link_types_by_name(&self, name: &str) -> Vec<IssueLinkType> {
        self.issue_link_types
            .iter()
            .filter(|l| l.name == name)
            .cloned()
            .collect()
    }

    fn is_issue_linking_enabled(&self) -> bool {
        self.issue_linking_enabled
    }
}

impl UserLookup for TargetSnapshot {
    fn user_exists(&self, name: &str) -> bool {
        self.users.contains(name)
    }

    fn has_external_user_management(&self) -> bool {
        self.external_user_management
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> TargetSnapshot {
        let mut project = ProjectSnapshot::new("1000", "PIG");
        project.issue_type_scheme = Some(vec!["1".to_string()]);
        project
            .workflow_scheme
            .insert("1".to_string(), "Bug Flow".to_string());
        TargetSnapshot {
            issue_types: vec![IssueType::new("1", "Bug"), IssueType::sub_task("5", "Sub-task")],
            projects: vec![project],
            workflows: vec![Workflow {
                name: "Bug Flow".to_string(),
                linked_status_ids: vec!["3".to_string()],
                system_default: false,
            }],
            field_contexts: vec![
                FieldContext::global("10", "100"),
                FieldContext::global("10", "200").for_projects(["1000"]),
                FieldContext::global("11", "300").for_issue_types(["1"]),
            ],
            ..TargetSnapshot::default()
        }
    }

    #[test]
    fn issue_type_by_name_ignores_case() {
        let target = snapshot();
        assert_eq!(target.issue_type_by_name("bug").map(|t| t.id), Some("1".to_string()));
        assert!(target.issue_type_by_name("Epic").is_none());
    }

    #[test]
    fn issue_type_scheme_falls_back_to_default() {
        let target = snapshot();
        assert!(target.is_issue_type_valid_for_project("PIG", "1"));
        assert!(!target.is_issue_type_valid_for_project("PIG", "5"));
        // Unknown project uses the default scheme, which allows everything.
        assert!(target.is_issue_type_valid_for_project("DOG", "5"));
    }

    #[test]
    fn workflow_for_uses_scheme_then_default() {
        let target = snapshot();
        assert_eq!(target.workflow_for("PIG", "1").name, "Bug Flow");
        assert!(target.workflow_for("PIG", "5").system_default);
        assert!(target.workflow_for("DOG", "1").system_default);
    }

    #[test]
    fn workflow_for_keeps_name_of_unregistered_scheme_workflow() {
        let mut target = snapshot();
        target.projects[0]
            .workflow_scheme
            .insert("5".to_string(), "Ghost Flow".to_string());
        let workflow = target.workflow_for("PIG", "5");
        assert_eq!(workflow.name, "Ghost Flow");
        assert!(!workflow.system_default);
        assert!(workflow.linked_status_ids.is_empty());
    }

    #[test]
    fn project_context_shadows_global_context() {
        let target = snapshot();
        assert_eq!(
            target.field_config_for("10", Some("1000"), "1").map(|c| c.id),
            Some("200".to_string())
        );
        assert_eq!(
            target.field_config_for("10", Some("2000"), "1").map(|c| c.id),
            Some("100".to_string())
        );
        assert_eq!(
            target.field_config_for("10", None, "1").map(|c| c.id),
            Some("100".to_string())
        );
    }

    #[test]
    fn issue_type_restricted_context() {
        let target = snapshot();
        assert!(target.field_config_for("11", None, "1").is_some());
        assert!(target.field_config_for("11", None, "5").is_none());
    }

    #[test]
    fn snapshot_defaults_enable_linking_and_sub_tasks() {
        let target: TargetSnapshot = serde_json::from_str("{}").expect("parse");
        assert!(target.is_sub_tasks_enabled());
        assert!(target.is_issue_linking_enabled());
        assert!(!target.has_external_user_management());
    }
}
