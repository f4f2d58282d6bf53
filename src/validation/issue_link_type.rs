//! Issue link type validation.

use crate::diagnostics::Diagnostics;
use crate::i18n::{Localizer, keys};
use crate::lookup::{ConstantsLookup, IssueLinkLookup};
use crate::mapping::IssueLinkTypeMapping;
use crate::model::{IssueLinkType, is_subtask_style};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueLinkTypeMapperValidator;

impl IssueLinkTypeMapperValidator {
    #[must_use]
    pub fn validate(
        &self,
        mapping: &IssueLinkTypeMapping,
        target: &(impl IssueLinkLookup + ConstantsLookup),
        localizer: &Localizer<'_>,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if !mapping.has_registered_values() {
            return diagnostics;
        }
        if !target.is_issue_linking_enabled() {
            diagnostics.add_error(localizer.message(keys::ISSUE_LINKING_DISABLED, Vec::new()));
        }

        for old_id in mapping.required_old_ids() {
            let Some(key) = mapping.key(old_id) else {
                debug!(old_id, "Dropping orphaned issue link type reference");
                continue;
            };
            let display_name = mapping.display_name(old_id);
            let old_style = mapping.style(old_id);

            let sub_tasks_disabled = is_subtask_style(old_style) && !target.is_sub_tasks_enabled();
            if sub_tasks_disabled {
                diagnostics.add_error(localizer.message(keys::LINK_TYPE_SUBTASKS_DISABLED, Vec::new()));
            }

            let Some(link_type) = resolve(mapping, old_id, key, target) else {
                // The sub-task link type disappears with sub-tasks; one error is enough.
                if !sub_tasks_disabled {
                    diagnostics.add_error(
                        localizer.message(keys::LINK_TYPE_DOES_NOT_EXIST, vec![display_name]),
                    );
                }
                continue;
            };

            match (old_style, link_type.style.as_deref()) {
                (None, None) => {}
                (Some(old), Some(new)) if old == new => {}
                (None, Some(new)) => diagnostics.add_error(localizer.message(
                    keys::LINK_TYPE_STYLE_UNEXPECTED,
                    crate::args![display_name, new],
                )),
                (Some(old), None) => diagnostics.add_error(localizer.message(
                    keys::LINK_TYPE_STYLE_MISSING,
                    crate::args![display_name, old],
                )),
                (Some(old), Some(new)) => diagnostics.add_error(localizer.message(
                    keys::LINK_TYPE_STYLE_DIFFERENT,
                    crate::args![display_name, old, new],
                )),
            }
        }

        diagnostics
    }
}

fn resolve(
    mapping: &IssueLinkTypeMapping,
    old_id: &str,
    key: &str,
    target: &impl IssueLinkLookup,
) -> Option<IssueLinkType> {
    match mapping.mapped_id(old_id) {
        Some(new_id) => target.issue_link_type(new_id),
        None => target.issue_link_types_by_name(key).into_iter().next(),
    }
}
