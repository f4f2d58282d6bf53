//! Custom field option validation.
//!
//! Options form at most one parent/child tier. Diagnostics are filed per
//! owning custom field (old id) so callers can present them under the field.

use crate::diagnostics::Diagnostics;
use crate::i18n::{Localizer, keys};
use crate::lookup::CustomFieldLookup;
use crate::mapping::{CustomFieldOptionMapping, ProjectImportMapper};
use crate::model::{BackupProject, CustomFieldOption, ExternalCustomFieldOption};
use std::collections::BTreeMap;
use tracing::debug;

/// Stands in for a parent option the backup never defined.
pub const UNKNOWN_PARENT: &str = "[unknown]";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomFieldOptionMapperValidator;

impl CustomFieldOptionMapperValidator {
    /// Validate every required option, returning one bucket per custom field
    /// that had something to report.
    #[must_use]
    pub fn validate(
        &self,
        backup: &BackupProject,
        mapper: &ProjectImportMapper,
        target: &impl CustomFieldLookup,
        localizer: &Localizer<'_>,
    ) -> BTreeMap<String, Diagnostics> {
        let mut buckets = BTreeMap::new();
        self.validate_into(backup, mapper, target, localizer, &mut buckets);
        buckets.retain(|_, diagnostics: &mut Diagnostics| !diagnostics.is_empty());
        buckets
    }

    /// Validate every required option, adding to `buckets` keyed by the old
    /// custom field id. Existing buckets are extended.
    pub fn validate_into(
        &self,
        backup: &BackupProject,
        mapper: &ProjectImportMapper,
        target: &impl CustomFieldLookup,
        localizer: &Localizer<'_>,
        buckets: &mut BTreeMap<String, Diagnostics>,
    ) {
        let options = &mapper.custom_field_options;

        for old_id in options.required_old_ids() {
            let Some(option) = options.option(old_id) else {
                debug!(old_id, "Dropping orphaned custom field option");
                continue;
            };
            if !Self::is_valid_context(backup, option) {
                debug!(
                    old_id,
                    field_config_id = %option.field_config_id,
                    "Ignoring option from an inapplicable field configuration"
                );
                continue;
            }
            let Some(new_field_id) = mapper.custom_fields.mapped_id(&option.custom_field_id)
            else {
                debug!(
                    old_id,
                    custom_field_id = %option.custom_field_id,
                    "Skipping option of an unmapped custom field"
                );
                continue;
            };

            let check = OptionCheck {
                option,
                options,
                field_name: mapper.custom_fields.display_name(&option.custom_field_id),
                localizer,
            };
            let bucket = buckets.entry(option.custom_field_id.clone()).or_default();
            match options.mapped_id(old_id) {
                None => check.does_not_exist(bucket),
                Some(new_id) => match target.option(new_id) {
                    None => check.does_not_exist(bucket),
                    Some(new_option) => check.mapped(&new_option, new_field_id, bucket),
                },
            }
        }
    }

    /// The option belongs to the configuration the backup recorded for its
    /// field in this project.
    fn is_valid_context(backup: &BackupProject, option: &ExternalCustomFieldOption) -> bool {
        backup
            .custom_field_configuration(&option.custom_field_id)
            .is_some_and(|config| config.configuration_scheme_id == option.field_config_id)
    }
}

struct OptionCheck<'a> {
    option: &'a ExternalCustomFieldOption,
    options: &'a CustomFieldOptionMapping,
    field_name: String,
    localizer: &'a Localizer<'a>,
}

impl OptionCheck<'_> {
    fn parent_value(&self) -> String {
        self.options
            .parent_of(&self.option.id)
            .map_or_else(|| UNKNOWN_PARENT.to_string(), |parent| parent.value.clone())
    }

    fn error(&self, key: &str, args: Vec<String>, bucket: &mut Diagnostics) {
        bucket.add_error(self.localizer.message(key, args));
    }

    fn does_not_exist(&self, bucket: &mut Diagnostics) {
        if self.option.is_top_level() {
            self.error(
                keys::OPTION_DOES_NOT_EXIST,
                vec![self.field_name.clone(), self.option.value.clone()],
                bucket,
            );
        } else {
            self.error(
                keys::OPTION_CHILD_DOES_NOT_EXIST,
                vec![
                    self.field_name.clone(),
                    self.parent_value(),
                    self.option.value.clone(),
                ],
                bucket,
            );
        }
    }

    fn mapped(&self, new_option: &CustomFieldOption, new_field_id: &str, bucket: &mut Diagnostics) {
        if new_option.custom_field_id != new_field_id {
            self.error(
                keys::OPTION_WRONG_CUSTOM_FIELD,
                vec![self.field_name.clone(), self.option.value.clone()],
                bucket,
            );
            return;
        }

        match (&self.option.parent_id, &new_option.parent_id) {
            (None, None) => {}
            (None, Some(_)) => self.error(
                keys::OPTION_NOT_TOP_LEVEL,
                vec![self.field_name.clone(), self.option.value.clone()],
                bucket,
            ),
            (Some(_), None) => self.error(
                keys::OPTION_NOT_CHILD,
                vec![self.field_name.clone(), self.option.value.clone()],
                bucket,
            ),
            (Some(old_parent), Some(new_parent)) => {
                let args = vec![
                    self.field_name.clone(),
                    self.parent_value(),
                    self.option.value.clone(),
                ];
                match self.options.mapped_id(old_parent) {
                    None => self.error(keys::OPTION_PARENT_NOT_MAPPED, args, bucket),
                    Some(mapped_parent) if mapped_parent != new_parent => {
                        self.error(keys::OPTION_PARENT_INCONSISTENT, args, bucket);
                    }
                    Some(_) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::TargetSnapshot;
    use crate::model::{ExternalCustomField, ExternalCustomFieldConfiguration};

    fn backup() -> BackupProject {
        let mut backup = BackupProject::new("PIG");
        backup
            .custom_field_configurations
            .push(ExternalCustomFieldConfiguration::new(
                ExternalCustomField::new("12", "Colour", "cascade"),
                "321",
            ));
        backup
    }

    /// Old options: 1 "Red" (top), 2 "Dark Red" (child of 1), 3 "Blue" (top).
    fn mapper() -> ProjectImportMapper {
        let mut mapper = ProjectImportMapper::default();
        mapper.custom_fields.register_old_value("12", "Colour");
        mapper.custom_fields.map_value("12", "120");
        let options = &mut mapper.custom_field_options;
        options.register_option(ExternalCustomFieldOption::top_level("1", "12", "321", "Red"));
        options.register_option(
            ExternalCustomFieldOption::top_level("2", "12", "321", "Dark Red").child_of("1"),
        );
        options.register_option(ExternalCustomFieldOption::top_level("3", "12", "321", "Blue"));
        for id in ["1", "2", "3"] {
            options.flag_as_required(id);
        }
        mapper
    }

    fn new_option(id: &str, field: &str, parent: Option<&str>) -> CustomFieldOption {
        CustomFieldOption {
            id: id.to_string(),
            custom_field_id: field.to_string(),
            parent_id: parent.map(str::to_string),
            value: format!("opt{id}"),
        }
    }

    fn target() -> TargetSnapshot {
        TargetSnapshot {
            options: vec![
                new_option("100", "120", None),
                new_option("200", "120", Some("100")),
                new_option("300", "120", None),
                new_option("400", "999", None),
            ],
            ..TargetSnapshot::default()
        }
    }

    fn fully_mapped() -> ProjectImportMapper {
        let mut mapper = mapper();
        mapper.custom_field_options.map_value("1", "100");
        mapper.custom_field_options.map_value("2", "200");
        mapper.custom_field_options.map_value("3", "300");
        mapper
    }

    fn errors(mapper: &ProjectImportMapper) -> Vec<String> {
        let buckets = CustomFieldOptionMapperValidator.validate(
            &backup(),
            mapper,
            &target(),
            &Localizer::english(),
        );
        buckets
            .get("12")
            .map(|d| d.errors().iter().map(|m| m.key.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn consistent_mapping_produces_no_buckets() {
        let buckets = CustomFieldOptionMapperValidator.validate(
            &backup(),
            &fully_mapped(),
            &target(),
            &Localizer::english(),
        );
        assert!(buckets.is_empty());
    }

    #[test]
    fn unmapped_top_level_and_child() {
        let buckets = CustomFieldOptionMapperValidator.validate(
            &backup(),
            &mapper(),
            &target(),
            &Localizer::english(),
        );
        let bucket = &buckets["12"];
        assert_eq!(bucket.errors().len(), 3);
        assert_eq!(bucket.errors()[0].key, keys::OPTION_DOES_NOT_EXIST);
        assert_eq!(bucket.errors()[1].key, keys::OPTION_CHILD_DOES_NOT_EXIST);
        assert_eq!(
            bucket.errors()[1].args,
            vec!["Colour".to_string(), "Red".to_string(), "Dark Red".to_string()]
        );
    }

    #[test]
    fn child_with_missing_parent_uses_placeholder() {
        let mut mapper = ProjectImportMapper::default();
        mapper.custom_fields.map_value("12", "120");
        mapper.custom_field_options.register_option(
            ExternalCustomFieldOption::top_level("2", "12", "321", "Dark Red").child_of("77"),
        );
        mapper.custom_field_options.flag_as_required("2");
        let buckets = CustomFieldOptionMapperValidator.validate(
            &backup(),
            &mapper,
            &target(),
            &Localizer::english(),
        );
        assert_eq!(buckets["12"].errors()[0].args[1], UNKNOWN_PARENT);
    }

    #[test]
    fn stale_target_option_does_not_exist() {
        let mut mapper = fully_mapped();
        mapper.custom_field_options.map_value("3", "999");
        assert_eq!(errors(&mapper), vec![keys::OPTION_DOES_NOT_EXIST]);
    }

    #[test]
    fn option_of_other_field_is_wrong_custom_field() {
        let mut mapper = fully_mapped();
        mapper.custom_field_options.map_value("3", "400");
        assert_eq!(errors(&mapper), vec![keys::OPTION_WRONG_CUSTOM_FIELD]);
    }

    #[test]
    fn top_level_mapped_to_child() {
        let mut mapper = fully_mapped();
        mapper.custom_field_options.map_value("3", "200");
        assert_eq!(errors(&mapper), vec![keys::OPTION_NOT_TOP_LEVEL]);
    }

    #[test]
    fn child_mapped_to_top_level() {
        let mut mapper = fully_mapped();
        mapper.custom_field_options.map_value("2", "300");
        assert_eq!(errors(&mapper), vec![keys::OPTION_NOT_CHILD]);
    }

    #[test]
    fn child_whose_parent_is_unmapped() {
        let mut mapper = mapper();
        mapper.custom_field_options.map_value("2", "200");
        mapper.custom_field_options.map_value("3", "300");
        let keys_found = errors(&mapper);
        assert!(keys_found.contains(&keys::OPTION_PARENT_NOT_MAPPED.to_string()));
    }

    #[test]
    fn child_under_different_parent() {
        let mut mapper = fully_mapped();
        mapper.custom_field_options.map_value("1", "300");
        assert_eq!(errors(&mapper), vec![keys::OPTION_PARENT_INCONSISTENT]);
    }

    #[test]
    fn option_from_other_configuration_is_ignored() {
        let mut mapper = ProjectImportMapper::default();
        mapper.custom_fields.map_value("12", "120");
        mapper
            .custom_field_options
            .register_option(ExternalCustomFieldOption::top_level("9", "12", "999", "Green"));
        mapper.custom_field_options.flag_as_required("9");
        assert!(errors(&mapper).is_empty());
    }

    #[test]
    fn orphaned_option_is_ignored() {
        let mut mapper = mapper();
        mapper.custom_field_options.flag_as_required("42");
        mapper.custom_field_options.map_value("1", "100");
        mapper.custom_field_options.map_value("2", "200");
        mapper.custom_field_options.map_value("3", "300");
        assert!(errors(&mapper).is_empty());
    }
}
