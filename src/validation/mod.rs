//! Mapping validators.
//!
//! One validator per entity type. Each reads mapping tables, target lookups
//! and backup context, and returns a fresh `Diagnostics`; none mutate any
//! state. Validation failures are data: nothing here returns `Err`.
//!
//! Shared conventions:
//! - only required old ids are checked, in ascending id order;
//! - an id with no registered key is orphan data, logged at debug and
//!   otherwise dropped (security levels additionally warn);
//! - an unmapped id is looked up by its key so the message can say why the
//!   automapper failed.

mod custom_field;
mod custom_field_option;
mod generic;
mod issue_link_type;
mod issue_type;
mod registry;
mod role_actor;
mod status;
mod user;

pub use custom_field::CustomFieldMapperValidator;
pub use custom_field_option::{CustomFieldOptionMapperValidator, UNKNOWN_PARENT};
pub use generic::{SimpleEntity, SimpleMappingValidator};
pub use issue_link_type::IssueLinkTypeMapperValidator;
pub use issue_type::IssueTypeMapperValidator;
pub use registry::ProjectImportValidators;
pub use role_actor::ProjectRoleActorMapperValidator;
pub use status::{StatusMapperValidator, WorkflowMiss, workflow_misses};
pub use user::{UserLinks, UserMapperValidator};
