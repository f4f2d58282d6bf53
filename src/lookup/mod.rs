//! Read-only query ports into the target system.
//!
//! Validators never see the target system directly; they ask these traits.
//! Lookups are infallible: a missing entity is `None`, not an error. If a
//! real deployment can fail mid-lookup, the caller owns that failure.
//!
//! `TargetSnapshot` implements every port over an in-memory, serde-loadable
//! copy of the target state.

mod snapshot;

pub use snapshot::{FieldContext, ProjectSnapshot, TargetSnapshot};

use crate::model::{
    CustomField, CustomFieldOption, CustomFieldType, FieldConfig, IssueLinkType, IssueType,
    Project, Status, Workflow,
};

/// Issue constants: issue types and statuses.
pub trait ConstantsLookup {
    fn issue_type(&self, id: &str) -> Option<IssueType>;
    /// Case-insensitive match on the issue type name.
    fn issue_type_by_name(&self, name: &str) -> Option<IssueType>;
    fn status(&self, id: &str) -> Option<Status>;
    /// Case-insensitive match on the status name.
    fn status_by_name(&self, name: &str) -> Option<Status>;
    fn is_sub_tasks_enabled(&self) -> bool;
}

pub trait ProjectLookup {
    fn project_by_key(&self, key: &str) -> Option<Project>;

    fn project_exists(&self, key: &str) -> bool {
        self.project_by_key(key).is_some()
    }

    /// Is the issue type part of the issue type scheme that applies to the
    /// project? A project that does not exist yet gets the default scheme.
    fn is_issue_type_valid_for_project(&self, project_key: &str, issue_type_id: &str) -> bool;
}

pub trait WorkflowLookup {
    /// Workflow the project's scheme assigns to the issue type.
    fn workflow_for(&self, project_key: &str, issue_type_id: &str) -> Workflow;
    fn default_workflow(&self) -> Workflow;
}

pub trait CustomFieldLookup {
    fn custom_field(&self, id: &str) -> Option<CustomField>;
    /// Installed type for `key`; `None` means the type's plugin is missing.
    fn custom_field_type(&self, key: &str) -> Option<CustomFieldType>;
    fn custom_fields_by_name(&self, name: &str) -> Vec<CustomField>;
    /// Field configuration the field resolves to for an issue of
    /// `issue_type_id` in `project_id`. `project_id` of `None` asks for the
    /// global context. `None` means the field is not relevant there.
    fn field_config_for(
        &self,
        custom_field_id: &str,
        project_id: Option<&str>,
        issue_type_id: &str,
    ) -> Option<FieldConfig>;
    fn option(&self, id: &str) -> Option<CustomFieldOption>;
}

pub trait IssueLinkLookup {
    fn issue_link_type(&self, id: &str) -> Option<IssueLinkType>;
    fn issue_link_types_by_name(&self, name: &str) -> Vec<IssueLinkType>;
    fn is_issue_linking_enabled(&self) -> bool;
}

pub trait UserLookup {
    fn user_exists(&self, name: &str) -> bool;
    fn has_external_user_management(&self) -> bool;
}

/// Every port at once; what the pipeline and registry are generic over.
pub trait TargetSystem:
    ConstantsLookup + ProjectLookup + WorkflowLookup + CustomFieldLookup + IssueLinkLookup + UserLookup
{
}

impl<T> TargetSystem for T where
    T: ConstantsLookup
        + ProjectLookup
        + WorkflowLookup
        + CustomFieldLookup
        + IssueLinkLookup
        + UserLookup
{
}
