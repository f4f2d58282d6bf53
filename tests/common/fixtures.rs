use import_mapping_check::bundle::ValidationBundle;
use import_mapping_check::lookup::{FieldContext, ProjectSnapshot, TargetSnapshot};
use import_mapping_check::mapping::ProjectImportMapper;
use import_mapping_check::model::{
    BackupProject, CustomField, CustomFieldOption, CustomFieldType, ExternalCustomField,
    ExternalCustomFieldConfiguration, ExternalCustomFieldOption, ExternalProjectRoleActor,
    ExternalUser, ImportOptions, IssueLinkType, IssueType, Status, Workflow,
};
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECT_KEY: &str = "PIG";
pub const PROJECT_ID: &str = "10000";

/// Old ids used throughout the fixture.
pub const OLD_BUG: &str = "1";
pub const OLD_SUBTASK: &str = "2";
pub const OLD_OPEN: &str = "1";
pub const OLD_SEVERITY: &str = "50";
pub const OLD_RED: &str = "500";
pub const OLD_DARK_RED: &str = "501";
pub const OLD_BLOCKS: &str = "10";

pub fn backup() -> BackupProject {
    let mut backup = BackupProject::new(PROJECT_KEY);
    backup.project.id = "1".to_string();
    backup
        .custom_field_configurations
        .push(ExternalCustomFieldConfiguration::new(
            ExternalCustomField::new(OLD_SEVERITY, "Severity", "cascade"),
            "70",
        ));
    backup
        .project_role_actors
        .push(ExternalProjectRoleActor::user("1", "admin"));
    backup
        .project_role_actors
        .push(ExternalProjectRoleActor::group("1", "developers"));
    backup
}

/// Mapping tables as the automapper would leave them for a clean target.
pub fn mapper() -> ProjectImportMapper {
    let mut mapper = ProjectImportMapper::default();

    mapper.issue_types.register_issue_type(OLD_BUG, "Bug", false);
    mapper.issue_types.register_issue_type(OLD_SUBTASK, "Sub-task", true);
    mapper.issue_types.flag_as_required(OLD_BUG);
    mapper.issue_types.flag_as_required(OLD_SUBTASK);
    mapper.issue_types.map_value(OLD_BUG, "10");
    mapper.issue_types.map_value(OLD_SUBTASK, "20");

    mapper.statuses.register_old_value(OLD_OPEN, "Open");
    mapper.statuses.flag_required_for_issue_type(OLD_OPEN, OLD_BUG);
    mapper.statuses.flag_required_for_issue_type(OLD_OPEN, OLD_SUBTASK);
    mapper.statuses.map_value(OLD_OPEN, "100");

    mapper.priorities.register_old_value("1", "Major");
    mapper.priorities.flag_as_required("1");
    mapper.priorities.map_value("1", "3");

    mapper.resolutions.register_old_value("1", "Fixed");
    mapper.resolutions.flag_as_required("1");
    mapper.resolutions.map_value("1", "1");

    mapper.project_roles.register_old_value("1", "Developers");
    mapper.project_roles.flag_as_required("1");
    mapper.project_roles.map_value("1", "10001");

    mapper.groups.register_old_value("developers", "developers");
    mapper.groups.flag_as_required("developers");
    mapper.groups.map_value("developers", "developers");

    mapper.custom_fields.register_old_value(OLD_SEVERITY, "Severity");
    mapper
        .custom_fields
        .flag_required_for_issue_type(OLD_SEVERITY, OLD_BUG);
    mapper.custom_fields.map_value(OLD_SEVERITY, "5000");

    let options = &mut mapper.custom_field_options;
    options.register_option(ExternalCustomFieldOption::top_level(
        OLD_RED,
        OLD_SEVERITY,
        "70",
        "Red",
    ));
    options.register_option(
        ExternalCustomFieldOption::top_level(OLD_DARK_RED, OLD_SEVERITY, "70", "Dark Red")
            .child_of(OLD_RED),
    );
    options.flag_as_required(OLD_RED);
    options.flag_as_required(OLD_DARK_RED);
    options.map_value(OLD_RED, "9000");
    options.map_value(OLD_DARK_RED, "9001");

    mapper
        .issue_link_types
        .register_link_type(OLD_BLOCKS, "Blocks", None);
    mapper.issue_link_types.flag_as_required(OLD_BLOCKS);
    mapper.issue_link_types.map_value(OLD_BLOCKS, "10000");

    mapper.users.flag_user_as_mandatory("admin");
    mapper.users.flag_user_as_in_use("fred");
    mapper.users.register_user(ExternalUser::named("fred"));

    mapper
}

pub fn target() -> TargetSnapshot {
    let mut project = ProjectSnapshot::new(PROJECT_ID, PROJECT_KEY);
    project.issue_type_scheme = Some(vec!["10".to_string(), "20".to_string()]);

    TargetSnapshot {
        issue_types: vec![IssueType::new("10", "Bug"), IssueType::sub_task("20", "Sub-task")],
        statuses: vec![Status::new("100", "Open"), Status::new("200", "Closed")],
        projects: vec![project],
        default_workflow: Workflow {
            name: "jira".to_string(),
            linked_status_ids: vec!["100".to_string(), "200".to_string()],
            system_default: true,
        },
        custom_fields: vec![CustomField::new("5000", "Severity", "cascade")],
        custom_field_types: vec![CustomFieldType::importable("cascade", "Cascading Select")],
        field_contexts: vec![FieldContext::global("5000", "700")],
        options: vec![
            option("9000", "5000", None, "Red"),
            option("9001", "5000", Some("9000"), "Dark Red"),
        ],
        issue_link_types: vec![IssueLinkType {
            id: "10000".to_string(),
            name: "Blocks".to_string(),
            style: None,
        }],
        users: ["admin".to_string()].into_iter().collect(),
        ..TargetSnapshot::default()
    }
}

pub fn option(id: &str, custom_field_id: &str, parent_id: Option<&str>, value: &str) -> CustomFieldOption {
    CustomFieldOption {
        id: id.to_string(),
        custom_field_id: custom_field_id.to_string(),
        parent_id: parent_id.map(str::to_string),
        value: value.to_string(),
    }
}

/// A bundle every validator accepts, with one user the import will create.
pub fn clean_bundle() -> ValidationBundle {
    ValidationBundle {
        backup: backup(),
        options: ImportOptions {
            overwrite_project_details: true,
        },
        mappings: mapper(),
        target: target(),
    }
}

/// `clean_bundle` with a priority the target does not have.
pub fn blocked_bundle() -> ValidationBundle {
    let mut bundle = clean_bundle();
    bundle.mappings.priorities.register_old_value("2", "Blocker");
    bundle.mappings.priorities.flag_as_required("2");
    bundle
}

pub fn write_json_bundle(dir: &Path, name: &str, bundle: &ValidationBundle) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(bundle).expect("serialize bundle");
    fs::write(&path, json).expect("write bundle");
    path
}

pub fn write_yaml_bundle(dir: &Path, name: &str, bundle: &ValidationBundle) -> PathBuf {
    let path = dir.join(name);
    let yaml = serde_yaml::to_string(bundle).expect("serialize bundle");
    fs::write(&path, yaml).expect("write bundle");
    path
}

pub fn bundle_arg(path: PathBuf) -> String {
    path.display().to_string()
}
