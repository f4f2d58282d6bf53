//! Status validation against the workflows the imported issues will use.
//!
//! A status is usable for an issue type when the workflow governing that
//! issue type in the target project links the status. When the target
//! project does not exist yet, the import will create it with the default
//! workflow, so the default workflow is checked instead.

use crate::diagnostics::Diagnostics;
use crate::i18n::{Localizer, keys};
use crate::lookup::{ConstantsLookup, ProjectLookup, WorkflowLookup};
use crate::mapping::{IssueTypeMapping, StatusMapping};
use crate::model::{BackupProject, Status, Workflow};
use tracing::debug;

/// A required issue type whose workflow does not link the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowMiss {
    pub old_issue_type_id: String,
    pub new_issue_type_id: String,
    pub workflow: Workflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMapperValidator {
    help_url: String,
}

impl StatusMapperValidator {
    #[must_use]
    pub fn new(help_url: impl Into<String>) -> Self {
        Self {
            help_url: help_url.into(),
        }
    }

    #[must_use]
    pub fn help_url(&self) -> &str {
        &self.help_url
    }

    /// Is `new_status_id` linked by the workflow of every issue type that
    /// requires `old_status_id`?
    #[must_use]
    pub fn is_status_valid(
        &self,
        old_status_id: &str,
        new_status_id: &str,
        statuses: &StatusMapping,
        issue_types: &IssueTypeMapping,
        target: &(impl ProjectLookup + WorkflowLookup),
        project_key: &str,
    ) -> bool {
        workflow_misses(old_status_id, new_status_id, statuses, issue_types, target, project_key)
            .is_empty()
    }

    #[must_use]
    pub fn validate(
        &self,
        backup: &BackupProject,
        statuses: &StatusMapping,
        issue_types: &IssueTypeMapping,
        target: &(impl ConstantsLookup + ProjectLookup + WorkflowLookup),
        localizer: &Localizer<'_>,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let project_key = backup.project_key();
        let project_exists = target.project_exists(project_key);

        for old_id in statuses.required_old_ids() {
            let Some(key) = statuses.key(old_id) else {
                debug!(old_id, "Dropping orphaned status reference");
                continue;
            };
            let display_name = statuses.display_name(old_id);
            let Some(status) = resolve(statuses, old_id, key, target) else {
                diagnostics.add_error(
                    localizer.message(keys::STATUS_DOES_NOT_EXIST, vec![display_name]),
                );
                continue;
            };

            for miss in
                workflow_misses(old_id, &status.id, statuses, issue_types, target, project_key)
            {
                let message_key = match (miss.workflow.system_default, project_exists) {
                    (true, true) => keys::STATUS_NOT_IN_DEFAULT_WORKFLOW,
                    (true, false) => keys::STATUS_NOT_IN_DEFAULT_WORKFLOW_NO_PROJECT,
                    (false, true) => keys::STATUS_NOT_IN_WORKFLOW,
                    (false, false) => keys::STATUS_NOT_IN_WORKFLOW_NO_PROJECT,
                };
                let issue_type_name = target
                    .issue_type(&miss.new_issue_type_id)
                    .map_or_else(|| issue_types.display_name(&miss.old_issue_type_id), |t| t.name);
                let link = localizer.link(keys::WORKFLOW_HELP_LABEL, self.help_url.clone());
                diagnostics.add_error(localizer.message_with_link(
                    message_key,
                    vec![
                        display_name.clone(),
                        issue_type_name,
                        miss.workflow.name,
                        project_key.to_string(),
                    ],
                    link,
                ));
            }
        }

        diagnostics
    }
}

fn resolve(
    statuses: &StatusMapping,
    old_id: &str,
    key: &str,
    target: &impl ConstantsLookup,
) -> Option<Status> {
    match statuses.mapped_id(old_id) {
        Some(new_id) => target.status(new_id),
        None => target.status_by_name(key),
    }
}

/// Every required issue type of `old_status_id` whose workflow does not
/// link `new_status_id`. Issue types without a mapping are skipped; the
/// issue type validator reports them.
pub fn workflow_misses(
    old_status_id: &str,
    new_status_id: &str,
    statuses: &StatusMapping,
    issue_types: &IssueTypeMapping,
    target: &(impl ProjectLookup + WorkflowLookup),
    project_key: &str,
) -> Vec<WorkflowMiss> {
    let project_exists = target.project_exists(project_key);
    statuses
        .issue_type_ids_for_required_status(old_status_id)
        .filter_map(|old_type| {
            let new_type = issue_types.mapped_id(old_type)?;
            let workflow = if project_exists {
                target.workflow_for(project_key, new_type)
            } else {
                target.default_workflow()
            };
            (!workflow.uses_status(new_status_id)).then(|| WorkflowMiss {
                old_issue_type_id: old_type.to_string(),
                new_issue_type_id: new_type.to_string(),
                workflow,
            })
        })
        .collect()
}
