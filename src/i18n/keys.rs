//! Message keys emitted by the validators and the pipeline.

// Generic entities
pub const PRIORITY_DOES_NOT_EXIST: &str =
    "admin.errors.project.import.priority.validation.does.not.exist";
pub const RESOLUTION_DOES_NOT_EXIST: &str =
    "admin.errors.project.import.resolution.validation.does.not.exist";
pub const GROUP_DOES_NOT_EXIST: &str = "admin.errors.project.import.group.validation.does.not.exist";
pub const PROJECT_ROLE_DOES_NOT_EXIST: &str =
    "admin.warning.project.import.project.role.validation.does.not.exist";
pub const SECURITY_LEVEL_DOES_NOT_EXIST: &str =
    "admin.errors.project.import.issue.security.level.does.not.exist";
pub const SECURITY_LEVEL_ORPHAN: &str = "admin.warning.project.import.issue.security.level.orphan";

// Custom fields
pub const CUSTOM_FIELD_DOES_NOT_EXIST: &str =
    "admin.errors.project.import.custom.field.does.not.exist";
pub const CUSTOM_FIELD_WRONG_TYPE: &str = "admin.errors.project.import.custom.field.wrong.type";
pub const CUSTOM_FIELD_WRONG_CONTEXT: &str =
    "admin.errors.project.import.custom.field.wrong.context";
pub const CUSTOM_FIELD_NOT_IMPORTABLE: &str =
    "admin.errors.project.import.custom.field.not.importable";
pub const CUSTOM_FIELD_PLUGIN_MISSING: &str =
    "admin.errors.project.import.custom.field.plugin.missing";
pub const CUSTOM_FIELD_NOT_MAPPED: &str = "admin.errors.project.import.custom.field.not.mapped";
pub const NONE: &str = "common.words.none";

// Custom field options
pub const OPTION_DOES_NOT_EXIST: &str =
    "admin.errors.project.import.custom.field.option.does.not.exist";
pub const OPTION_CHILD_DOES_NOT_EXIST: &str =
    "admin.errors.project.import.custom.field.option.child.does.not.exist";
pub const OPTION_WRONG_CUSTOM_FIELD: &str =
    "admin.errors.project.import.custom.field.option.wrong.custom.field";
pub const OPTION_NOT_TOP_LEVEL: &str =
    "admin.errors.project.import.custom.field.option.not.top.level";
pub const OPTION_NOT_CHILD: &str = "admin.errors.project.import.custom.field.option.not.child";
pub const OPTION_PARENT_NOT_MAPPED: &str =
    "admin.errors.project.import.custom.field.option.parent.not.mapped";
pub const OPTION_PARENT_INCONSISTENT: &str =
    "admin.errors.project.import.custom.field.option.parent.inconsistent";

// Issue types
pub const ISSUE_TYPE_NOT_EXISTS: &str = "admin.errors.project.import.issuetype.not.exists";
pub const ISSUE_TYPE_SUBTASK_NOT_EXISTS: &str =
    "admin.errors.project.import.issuetype.subtask.not.exists";
pub const ISSUE_TYPE_SUBTASK_NOT_EXISTS_SUBTASKS_DISABLED: &str =
    "admin.errors.project.import.issuetype.subtask.not.exists.subtasks.disabled";
pub const ISSUE_TYPE_NOT_IN_SCHEME: &str = "admin.errors.project.import.issuetype.not.in.scheme";
pub const ISSUE_TYPE_IS_SUBTASK: &str = "admin.errors.project.import.issuetype.is.subtask";
pub const ISSUE_TYPE_IS_NOT_SUBTASK: &str = "admin.errors.project.import.issuetype.is.not.subtask";
pub const ISSUE_TYPE_NOT_MAPPED: &str = "admin.errors.project.import.issuetype.not.mapped";

// Statuses
pub const STATUS_DOES_NOT_EXIST: &str = "admin.errors.project.import.status.does.not.exist";
pub const STATUS_NOT_IN_DEFAULT_WORKFLOW: &str =
    "admin.errors.project.import.status.not.in.default.workflow";
pub const STATUS_NOT_IN_DEFAULT_WORKFLOW_NO_PROJECT: &str =
    "admin.errors.project.import.status.not.in.default.workflow.no.project";
pub const STATUS_NOT_IN_WORKFLOW: &str = "admin.errors.project.import.status.not.in.workflow";
pub const STATUS_NOT_IN_WORKFLOW_NO_PROJECT: &str =
    "admin.errors.project.import.status.not.in.workflow.no.project";
pub const WORKFLOW_HELP_LABEL: &str = "admin.project.import.workflow.help.label";

// Issue link types
pub const ISSUE_LINKING_DISABLED: &str = "admin.errors.project.import.issuelinking.disabled";
pub const LINK_TYPE_SUBTASKS_DISABLED: &str =
    "admin.errors.project.import.issuelinktype.subtasks.disabled";
pub const LINK_TYPE_DOES_NOT_EXIST: &str =
    "admin.errors.project.import.issuelinktype.does.not.exist";
pub const LINK_TYPE_STYLE_UNEXPECTED: &str =
    "admin.errors.project.import.issuelinktype.style.unexpected";
pub const LINK_TYPE_STYLE_MISSING: &str = "admin.errors.project.import.issuelinktype.style.missing";
pub const LINK_TYPE_STYLE_DIFFERENT: &str =
    "admin.errors.project.import.issuelinktype.style.different";

// Project role actors
pub const ROLE_ACTOR_USER_EXT_MGMT: &str =
    "admin.warning.project.import.role.actor.user.does.not.exist.ext.mgmt";
pub const ROLE_ACTOR_USER: &str = "admin.warning.project.import.role.actor.user.does.not.exist";
pub const ROLE_ACTOR_GROUP: &str = "admin.warning.project.import.role.actor.group.does.not.exist";
pub const ROLE_ACTOR_UNKNOWN_TYPE: &str = "admin.warning.project.import.role.actor.unknown.type";

// Users
pub const USERS_EXT_MGMT_MISSING_MANDATORY: &str =
    "admin.errors.project.import.users.ext.mgmt.missing.mandatory";
pub const USERS_EXT_MGMT_MISSING_OPTIONAL: &str =
    "admin.warning.project.import.users.ext.mgmt.missing.optional";
pub const USERS_MISSING_MANDATORY_CANNOT_CREATE: &str =
    "admin.errors.project.import.users.missing.mandatory.cannot.create";
pub const USERS_MISSING_OPTIONAL_CANNOT_CREATE: &str =
    "admin.warning.project.import.users.missing.optional.cannot.create";
pub const USERS_WILL_BE_CREATED: &str = "admin.warning.project.import.users.will.be.created";
pub const USERS_VIEW_DETAILS: &str = "admin.project.import.users.view.details";

// Pipeline section titles
pub const SECTION_ISSUE_TYPE: &str = "issue.field.issuetype";
pub const SECTION_CUSTOM_FIELD: &str = "admin.project.import.custom.field.configuration";
pub const SECTION_STATUS: &str = "issue.field.status";
pub const SECTION_PRIORITY: &str = "issue.field.priority";
pub const SECTION_RESOLUTION: &str = "issue.field.resolution";
pub const SECTION_USERS: &str = "admin.common.words.users";
pub const SECTION_PROJECT_ROLE: &str = "admin.common.words.projectrole";
pub const SECTION_PROJECT_ROLE_MEMBERSHIP: &str = "admin.common.words.projectrole.membership";
pub const SECTION_GROUP: &str = "admin.common.words.group";
pub const SECTION_ISSUE_LINK_TYPE: &str = "common.concepts.issuelinktype";
pub const SECTION_SECURITY_LEVEL: &str = "admin.common.words.issue.security.level";
