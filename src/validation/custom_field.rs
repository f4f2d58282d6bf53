//! Custom field validation.
//!
//! A mapped field is re-checked against the target: its type must still
//! support project import, match the backup field's type, and be available
//! (have a field configuration) for every constrained issue type the field is
//! used by. An unmapped field is diagnosed by walking the reasons the
//! automapper could have given up.

use crate::diagnostics::{Diagnostics, Message};
use crate::i18n::{Localizer, keys};
use crate::lookup::{CustomFieldLookup, ProjectLookup};
use crate::mapping::{IssueTypeMapping, ProjectImportMapper};
use crate::model::{BackupProject, CustomField, ExternalCustomFieldConfiguration};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomFieldMapperValidator;

impl CustomFieldMapperValidator {
    #[must_use]
    pub fn validate(
        &self,
        backup: &BackupProject,
        mapper: &ProjectImportMapper,
        target: &(impl CustomFieldLookup + ProjectLookup),
        localizer: &Localizer<'_>,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let project_id = target.project_by_key(backup.project_key()).map(|p| p.id);
        let fields = &mapper.custom_fields;

        for old_id in fields.required_old_ids() {
            let Some(config) = backup.custom_field_configuration(old_id) else {
                debug!(old_id, "Ignoring custom field with orphaned configuration");
                continue;
            };
            let check = FieldCheck {
                old_id,
                config,
                display_name: fields.display_name(old_id),
                project_id: project_id.as_deref(),
                mapper,
            };
            match fields.mapped_id(old_id) {
                Some(new_id) => check.mapped(new_id, target, localizer, &mut diagnostics),
                None => check.unmapped(target, localizer, &mut diagnostics),
            }
        }

        diagnostics
    }

    /// True when the field will be dropped from the import without an error:
    /// its configuration is orphaned, or it is unmapped and its type is
    /// missing or not importable.
    #[must_use]
    pub fn is_ignored_custom_field(
        &self,
        backup: &BackupProject,
        mapper: &ProjectImportMapper,
        target: &impl CustomFieldLookup,
        old_id: &str,
    ) -> bool {
        let Some(config) = backup.custom_field_configuration(old_id) else {
            return true;
        };
        if mapper.custom_fields.mapped_id(old_id).is_some() {
            return false;
        }
        target
            .custom_field_type(&config.custom_field.type_key)
            .is_none_or(|field_type| !field_type.project_importable)
    }
}

struct FieldCheck<'a> {
    old_id: &'a str,
    config: &'a ExternalCustomFieldConfiguration,
    display_name: String,
    project_id: Option<&'a str>,
    mapper: &'a ProjectImportMapper,
}

impl FieldCheck<'_> {
    fn old_type_key(&self) -> &str {
        &self.config.custom_field.type_key
    }

    fn type_name(&self, target: &impl CustomFieldLookup) -> String {
        target
            .custom_field_type(self.old_type_key())
            .map_or_else(|| self.old_type_key().to_string(), |t| t.name)
    }

    fn mapped(
        &self,
        new_id: &str,
        target: &(impl CustomFieldLookup + ProjectLookup),
        localizer: &Localizer<'_>,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(new_field) = target.custom_field(new_id) else {
            diagnostics.add_error(localizer.message(
                keys::CUSTOM_FIELD_DOES_NOT_EXIST,
                vec![self.display_name.clone(), self.type_name(target)],
            ));
            return;
        };

        let importable = target
            .custom_field_type(&new_field.type_key)
            .is_some_and(|t| t.project_importable);
        if !importable {
            diagnostics.add_error(localizer.message(
                keys::CUSTOM_FIELD_NOT_IMPORTABLE,
                vec![self.display_name.clone()],
            ));
            return;
        }

        if new_field.type_key != self.old_type_key() {
            diagnostics.add_error(localizer.message(
                keys::CUSTOM_FIELD_WRONG_TYPE,
                vec![self.display_name.clone(), self.type_name(target)],
            ));
            return;
        }

        let unavailable = self.unavailable_issue_types(&new_field, target);
        if !unavailable.is_empty() {
            diagnostics.add_error(self.wrong_context(&unavailable, localizer));
        }
    }

    fn unmapped(
        &self,
        target: &(impl CustomFieldLookup + ProjectLookup),
        localizer: &Localizer<'_>,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(field_type) = target.custom_field_type(self.old_type_key()) else {
            diagnostics.add_warning(localizer.message(
                keys::CUSTOM_FIELD_PLUGIN_MISSING,
                vec![self.display_name.clone(), self.old_type_key().to_string()],
            ));
            return;
        };
        if !field_type.project_importable {
            diagnostics.add_warning(localizer.message(
                keys::CUSTOM_FIELD_NOT_IMPORTABLE,
                vec![self.display_name.clone()],
            ));
            return;
        }

        let name = self
            .mapper
            .custom_fields
            .key(self.old_id)
            .unwrap_or(self.config.custom_field.name.as_str());
        let candidates = target.custom_fields_by_name(name);
        if candidates.is_empty() {
            diagnostics.add_error(localizer.message(
                keys::CUSTOM_FIELD_DOES_NOT_EXIST,
                vec![self.display_name.clone(), field_type.name],
            ));
            return;
        }

        let same_type: Vec<&CustomField> = candidates
            .iter()
            .filter(|candidate| candidate.type_key == self.old_type_key())
            .collect();
        if same_type.is_empty() {
            diagnostics.add_error(localizer.message(
                keys::CUSTOM_FIELD_WRONG_TYPE,
                vec![self.display_name.clone(), field_type.name],
            ));
            return;
        }

        let mut first_unavailable = None;
        for candidate in same_type {
            let unavailable = self.unavailable_issue_types(candidate, target);
            if unavailable.is_empty() {
                // A usable candidate exists, yet nothing mapped it.
                diagnostics.add_error(localizer.message(
                    keys::CUSTOM_FIELD_NOT_MAPPED,
                    vec![self.display_name.clone(), field_type.name],
                ));
                return;
            }
            first_unavailable.get_or_insert(unavailable);
        }
        if let Some(unavailable) = first_unavailable {
            diagnostics.add_error(self.wrong_context(&unavailable, localizer));
        }
    }

    /// Names of the issue types the field is required for, constrained to in
    /// the backup configuration, but not available to in the target.
    fn unavailable_issue_types(
        &self,
        new_field: &CustomField,
        target: &impl CustomFieldLookup,
    ) -> Vec<String> {
        let issue_types: &IssueTypeMapping = &self.mapper.issue_types;
        self.mapper
            .custom_fields
            .issue_type_ids_for_required_custom_field(self.old_id)
            .filter(|old_type| self.config.applies_to_issue_type(old_type))
            .filter_map(|old_type| {
                let Some(new_type) = issue_types.mapped_id(old_type) else {
                    debug!(
                        old_issue_type = old_type,
                        "Skipping relevance check for unmapped issue type"
                    );
                    return None;
                };
                target
                    .field_config_for(&new_field.id, self.project_id, new_type)
                    .is_none()
                    .then(|| issue_types.display_name(old_type))
            })
            .collect()
    }

    fn wrong_context(&self, issue_types: &[String], localizer: &Localizer<'_>) -> Message {
        let names = if issue_types.is_empty() {
            localizer.text(keys::NONE, &[])
        } else {
            issue_types.join(", ")
        };
        localizer.message(
            keys::CUSTOM_FIELD_WRONG_CONTEXT,
            vec![self.display_name.clone(), names],
        )
    }
}
