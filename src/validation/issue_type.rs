//! Issue type validation.

use crate::diagnostics::Diagnostics;
use crate::i18n::{Localizer, keys};
use crate::lookup::{ConstantsLookup, ProjectLookup};
use crate::mapping::IssueTypeMapping;
use crate::model::{BackupProject, IssueType};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueTypeMapperValidator;

impl IssueTypeMapperValidator {
    /// Check every required issue type.
    ///
    /// An unmapped type is looked up by name so the message can say why the
    /// automapper could not use it.
    #[must_use]
    pub fn validate(
        &self,
        backup: &BackupProject,
        mapping: &IssueTypeMapping,
        target: &(impl ConstantsLookup + ProjectLookup),
        localizer: &Localizer<'_>,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for old_id in mapping.required_old_ids() {
            let Some(key) = mapping.key(old_id) else {
                debug!(old_id, "Dropping orphaned issue type reference");
                continue;
            };
            let display_name = mapping.display_name(old_id);
            let old_is_sub_task = mapping.is_sub_task(old_id);

            let Some(candidate) = resolve(mapping, old_id, key, target) else {
                let message_key = if !old_is_sub_task {
                    keys::ISSUE_TYPE_NOT_EXISTS
                } else if target.is_sub_tasks_enabled() {
                    keys::ISSUE_TYPE_SUBTASK_NOT_EXISTS
                } else {
                    keys::ISSUE_TYPE_SUBTASK_NOT_EXISTS_SUBTASKS_DISABLED
                };
                diagnostics.add_error(localizer.message(message_key, vec![display_name]));
                continue;
            };

            let mut failed = false;
            if !target.is_issue_type_valid_for_project(backup.project_key(), &candidate.id) {
                diagnostics.add_error(
                    localizer.message(keys::ISSUE_TYPE_NOT_IN_SCHEME, vec![display_name.clone()]),
                );
                failed = true;
            }
            match (old_is_sub_task, candidate.sub_task) {
                (false, true) => {
                    diagnostics.add_error(
                        localizer.message(keys::ISSUE_TYPE_IS_SUBTASK, vec![display_name.clone()]),
                    );
                    failed = true;
                }
                (true, false) => {
                    diagnostics.add_error(localizer.message(
                        keys::ISSUE_TYPE_IS_NOT_SUBTASK,
                        vec![display_name.clone()],
                    ));
                    failed = true;
                }
                _ => {}
            }

            if !failed && mapping.mapped_id(old_id).is_none() {
                diagnostics.add_error(localizer.message(keys::ISSUE_TYPE_NOT_MAPPED, vec![display_name]));
            }
        }

        diagnostics
    }
}

fn resolve(
    mapping: &IssueTypeMapping,
    old_id: &str,
    key: &str,
    target: &impl ConstantsLookup,
) -> Option<IssueType> {
    match mapping.mapped_id(old_id) {
        Some(new_id) => target.issue_type(new_id),
        None => target.issue_type_by_name(key),
    }
}
