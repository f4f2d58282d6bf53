//! The set of validators one import attempt uses.

use super::{
    CustomFieldMapperValidator, CustomFieldOptionMapperValidator, IssueLinkTypeMapperValidator,
    IssueTypeMapperValidator, ProjectRoleActorMapperValidator, SimpleEntity,
    SimpleMappingValidator, StatusMapperValidator, UserMapperValidator,
};
use crate::config::ValidationSettings;

/// Every validator, configured once from `ValidationSettings` and handed to
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectImportValidators {
    status: StatusMapperValidator,
    user: UserMapperValidator,
}

impl ProjectImportValidators {
    #[must_use]
    pub fn new(settings: &ValidationSettings) -> Self {
        Self {
            status: StatusMapperValidator::new(settings.workflow_help_url.clone()),
            user: UserMapperValidator::new(settings.user_links.clone()),
        }
    }

    #[must_use]
    pub const fn issue_type(&self) -> IssueTypeMapperValidator {
        IssueTypeMapperValidator
    }

    #[must_use]
    pub const fn custom_field(&self) -> CustomFieldMapperValidator {
        CustomFieldMapperValidator
    }

    #[must_use]
    pub const fn custom_field_option(&self) -> CustomFieldOptionMapperValidator {
        CustomFieldOptionMapperValidator
    }

    #[must_use]
    pub const fn status(&self) -> &StatusMapperValidator {
        &self.status
    }

    #[must_use]
    pub const fn priority(&self) -> SimpleMappingValidator {
        SimpleMappingValidator::new(SimpleEntity::Priority)
    }

    #[must_use]
    pub const fn resolution(&self) -> SimpleMappingValidator {
        SimpleMappingValidator::new(SimpleEntity::Resolution)
    }

    #[must_use]
    pub const fn group(&self) -> SimpleMappingValidator {
        SimpleMappingValidator::new(SimpleEntity::Group)
    }

    #[must_use]
    pub const fn project_role(&self) -> SimpleMappingValidator {
        SimpleMappingValidator::new(SimpleEntity::ProjectRole)
    }

    #[must_use]
    pub const fn security_level(&self) -> SimpleMappingValidator {
        SimpleMappingValidator::new(SimpleEntity::SecurityLevel)
    }

    #[must_use]
    pub const fn issue_link_type(&self) -> IssueLinkTypeMapperValidator {
        IssueLinkTypeMapperValidator
    }

    #[must_use]
    pub const fn project_role_actor(&self) -> ProjectRoleActorMapperValidator {
        ProjectRoleActorMapperValidator
    }

    #[must_use]
    pub const fn user(&self) -> &UserMapperValidator {
        &self.user
    }
}

impl Default for ProjectImportValidators {
    fn default() -> Self {
        Self::new(&ValidationSettings::default())
    }
}
