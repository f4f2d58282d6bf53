//! One full validation pass over an import attempt.
//!
//! Stages run in a fixed order. Issue types and custom field configuration
//! gate everything else: when either reports an error the later stages are
//! not run and their sections are recorded as "not checked".

use crate::diagnostics::{Diagnostics, FieldDiagnostics, Severity};
use crate::i18n::{Localizer, keys};
use crate::lookup::TargetSystem;
use crate::mapping::ProjectImportMapper;
use crate::model::{BackupProject, ImportOptions};
use crate::validation::ProjectImportValidators;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Diagnostics for one entity type, under a localized title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSection {
    pub title_key: String,
    pub title: String,
    /// `None` when the stage was skipped.
    pub diagnostics: Option<Diagnostics>,
}

impl MappingSection {
    fn new(title_key: &str, localizer: &Localizer<'_>, diagnostics: Option<Diagnostics>) -> Self {
        Self {
            title_key: title_key.to_string(),
            title: localizer.text(title_key, &[]),
            diagnostics,
        }
    }

    #[must_use]
    pub const fn was_checked(&self) -> bool {
        self.diagnostics.is_some()
    }
}

/// Option diagnostics for one required custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldValueSection {
    pub custom_field_id: String,
    pub name: String,
    pub diagnostics: Option<Diagnostics>,
}

/// Everything a validation pass found, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResult {
    pub system_fields: Vec<MappingSection>,
    pub custom_field_values: Vec<CustomFieldValueSection>,
}

impl MappingResult {
    /// True when no checked section holds an error.
    #[must_use]
    pub fn can_import(&self) -> bool {
        self.error_count() == 0
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    #[must_use]
    pub fn section(&self, title_key: &str) -> Option<&MappingSection> {
        self.system_fields.iter().find(|s| s.title_key == title_key)
    }

    #[must_use]
    pub fn custom_field_value(&self, custom_field_id: &str) -> Option<&CustomFieldValueSection> {
        self.custom_field_values
            .iter()
            .find(|s| s.custom_field_id == custom_field_id)
    }

    fn count(&self, severity: Severity) -> usize {
        let system = self.system_fields.iter().filter_map(|s| s.diagnostics.as_ref());
        let values = self
            .custom_field_values
            .iter()
            .filter_map(|s| s.diagnostics.as_ref());
        system
            .chain(values)
            .map(|d| match severity {
                Severity::Error => d.errors().len(),
                Severity::Warning => d.warnings().len(),
            })
            .sum()
    }
}

/// Run every validator in order and collect the results.
#[must_use]
pub fn run(
    backup: &BackupProject,
    options: &ImportOptions,
    mapper: &ProjectImportMapper,
    target: &impl TargetSystem,
    validators: &ProjectImportValidators,
    localizer: &Localizer<'_>,
) -> MappingResult {
    let mut result = MappingResult::default();
    let section = |key: &str, diagnostics: Option<Diagnostics>| {
        MappingSection::new(key, localizer, diagnostics)
    };

    let issue_types = validators
        .issue_type()
        .validate(backup, &mapper.issue_types, target, localizer);
    debug!(
        errors = issue_types.errors().len(),
        warnings = issue_types.warnings().len(),
        "Validated issue types"
    );
    let issue_types_failed = issue_types.has_any_errors();
    result
        .system_fields
        .push(section(keys::SECTION_ISSUE_TYPE, Some(issue_types)));

    let custom_fields = (!issue_types_failed).then(|| {
        let diagnostics = validators
            .custom_field()
            .validate(backup, mapper, target, localizer);
        debug!(
            errors = diagnostics.errors().len(),
            warnings = diagnostics.warnings().len(),
            "Validated custom field configuration"
        );
        diagnostics
    });
    let gate_passed = custom_fields
        .as_ref()
        .is_some_and(|diagnostics| !diagnostics.has_any_errors());
    result
        .system_fields
        .push(section(keys::SECTION_CUSTOM_FIELD, custom_fields));

    let mut field_buckets = FieldDiagnostics::new();
    for old_id in mapper.custom_fields.required_old_ids() {
        if validators
            .custom_field()
            .is_ignored_custom_field(backup, mapper, target, old_id)
        {
            debug!(old_id, "Custom field will not be imported; no value section");
            continue;
        }
        field_buckets.insert(old_id.to_string(), gate_passed.then(Diagnostics::new));
    }

    if gate_passed {
        let mut buckets: BTreeMap<String, Diagnostics> = field_buckets
            .keys()
            .map(|id| (id.clone(), Diagnostics::new()))
            .collect();
        validators
            .custom_field_option()
            .validate_into(backup, mapper, target, localizer, &mut buckets);
        debug!(fields = buckets.len(), "Validated custom field options");
        for (old_id, diagnostics) in buckets {
            field_buckets.insert(old_id, Some(diagnostics));
        }

        let system = [
            (
                keys::SECTION_PRIORITY,
                validators.priority().validate(&mapper.priorities, localizer),
            ),
            (
                keys::SECTION_RESOLUTION,
                validators.resolution().validate(&mapper.resolutions, localizer),
            ),
            (
                keys::SECTION_STATUS,
                validators.status().validate(
                    backup,
                    &mapper.statuses,
                    &mapper.issue_types,
                    target,
                    localizer,
                ),
            ),
            (
                keys::SECTION_PROJECT_ROLE,
                validators
                    .project_role()
                    .validate(&mapper.project_roles, localizer),
            ),
            (
                keys::SECTION_PROJECT_ROLE_MEMBERSHIP,
                validators
                    .project_role_actor()
                    .validate(backup, options, mapper, target, localizer),
            ),
            (
                keys::SECTION_USERS,
                validators.user().validate(&mapper.users, target, localizer),
            ),
            (
                keys::SECTION_GROUP,
                validators.group().validate(&mapper.groups, localizer),
            ),
            (
                keys::SECTION_ISSUE_LINK_TYPE,
                validators
                    .issue_link_type()
                    .validate(&mapper.issue_link_types, target, localizer),
            ),
            (
                keys::SECTION_SECURITY_LEVEL,
                validators
                    .security_level()
                    .validate(&mapper.security_levels, localizer),
            ),
        ];
        for (key, diagnostics) in system {
            debug!(
                section = key,
                errors = diagnostics.errors().len(),
                warnings = diagnostics.warnings().len(),
                "Validated system field"
            );
            result.system_fields.push(section(key, Some(diagnostics)));
        }
    } else {
        for key in SYSTEM_SECTIONS {
            result.system_fields.push(section(key, None));
        }
    }

    result.custom_field_values = field_buckets
        .into_iter()
        .map(|(custom_field_id, diagnostics)| CustomFieldValueSection {
            name: mapper.custom_fields.display_name(&custom_field_id),
            custom_field_id,
            diagnostics,
        })
        .collect();

    info!(
        project = backup.project_key(),
        can_import = result.can_import(),
        errors = result.error_count(),
        warnings = result.warning_count(),
        "Mapping validation finished"
    );
    result
}

/// Sections that only run once issue types and custom fields pass.
const SYSTEM_SECTIONS: [&str; 9] = [
    keys::SECTION_PRIORITY,
    keys::SECTION_RESOLUTION,
    keys::SECTION_STATUS,
    keys::SECTION_PROJECT_ROLE,
    keys::SECTION_PROJECT_ROLE_MEMBERSHIP,
    keys::SECTION_USERS,
    keys::SECTION_GROUP,
    keys::SECTION_ISSUE_LINK_TYPE,
    keys::SECTION_SECURITY_LEVEL,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use crate::lookup::TargetSnapshot;
    use crate::model::{
        CustomField, CustomFieldType, ExternalCustomField, ExternalCustomFieldConfiguration,
        IssueType,
    };
    use tracing::info;

    fn target() -> TargetSnapshot {
        TargetSnapshot {
            issue_types: vec![IssueType::new("1", "Bug")],
            custom_fields: vec![CustomField::new("120", "Colour", "select")],
            custom_field_types: vec![CustomFieldType::importable("select", "Select List")],
            ..TargetSnapshot::default()
        }
    }

    fn backup() -> BackupProject {
        let mut backup = BackupProject::new("PIG");
        backup
            .custom_field_configurations
            .push(ExternalCustomFieldConfiguration::new(
                ExternalCustomField::new("12", "Colour", "select"),
                "321",
            ));
        backup
    }

    fn mapper() -> ProjectImportMapper {
        let mut mapper = ProjectImportMapper::default();
        mapper.issue_types.register_issue_type("10", "Bug", false);
        mapper.issue_types.flag_as_required("10");
        mapper.issue_types.map_value("10", "1");
        mapper.custom_fields.register_old_value("12", "Colour");
        mapper.custom_fields.flag_as_required("12");
        mapper.custom_fields.map_value("12", "120");
        mapper
    }

    fn run_default(mapper: &ProjectImportMapper) -> MappingResult {
        run(
            &backup(),
            &ImportOptions::default(),
            mapper,
            &target(),
            &ProjectImportValidators::default(),
            &Localizer::english(),
        )
    }

    #[test]
    fn clean_run_checks_every_section() {
        init_test_logging();
        info!("clean_run_checks_every_section: starting");
        let result = run_default(&mapper());
        assert!(result.can_import());
        assert_eq!(result.system_fields.len(), 11);
        assert!(result.system_fields.iter().all(MappingSection::was_checked));
        assert_eq!(result.system_fields[0].title, "Issue Type");
        let colour = result.custom_field_value("12").expect("value section");
        assert_eq!(colour.name, "Colour");
        assert_eq!(colour.diagnostics, Some(Diagnostics::new()));
    }

    #[test]
    fn issue_type_failure_skips_everything_else() {
        init_test_logging();
        let mut mapper = mapper();
        mapper.issue_types.register_issue_type("11", "Epic", false);
        mapper.issue_types.flag_as_required("11");
        mapper.priorities.register_old_value("1", "Blocker");
        mapper.priorities.flag_as_required("1");

        let result = run_default(&mapper);
        assert!(!result.can_import());
        assert!(result.system_fields[0].was_checked());
        assert!(
            result.system_fields[1..]
                .iter()
                .all(|section| !section.was_checked())
        );
        assert_eq!(result.custom_field_value("12").and_then(|s| s.diagnostics.as_ref()), None);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn custom_field_failure_skips_system_fields() {
        let mut mapper = mapper();
        mapper.custom_fields.map_value("12", "999");
        let result = run_default(&mapper);
        let custom = result.section(keys::SECTION_CUSTOM_FIELD).expect("section");
        assert!(custom.diagnostics.as_ref().is_some_and(Diagnostics::has_any_errors));
        assert!(!result.section(keys::SECTION_PRIORITY).expect("priority").was_checked());
    }

    #[test]
    fn system_field_errors_block_import() {
        let mut mapper = mapper();
        mapper.resolutions.register_old_value("5", "Won't Fix");
        mapper.resolutions.flag_as_required("5");
        let result = run_default(&mapper);
        assert!(!result.can_import());
        let resolution = result.section(keys::SECTION_RESOLUTION).expect("section");
        assert!(resolution.diagnostics.as_ref().is_some_and(Diagnostics::has_any_errors));
    }

    #[test]
    fn warnings_alone_do_not_block() {
        let mut mapper = mapper();
        mapper.project_roles.register_old_value("3", "Watchers");
        mapper.project_roles.flag_as_required("3");
        let result = run_default(&mapper);
        assert!(result.can_import());
        assert_eq!(result.warning_count(), 1);
    }
}
