//! Project role membership validation.
//!
//! Only relevant when the import overwrites the project's details; otherwise
//! role memberships are left as they are in the target. Every problem here is
//! a warning: a missing member degrades the import but does not block it.

use crate::diagnostics::Diagnostics;
use crate::i18n::{Localizer, keys};
use crate::lookup::UserLookup;
use crate::mapping::ProjectImportMapper;
use crate::model::{BackupProject, ImportOptions, RoleActorKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectRoleActorMapperValidator;

impl ProjectRoleActorMapperValidator {
    #[must_use]
    pub fn validate(
        &self,
        backup: &BackupProject,
        options: &ImportOptions,
        mapper: &ProjectImportMapper,
        target: &impl UserLookup,
        localizer: &Localizer<'_>,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if !options.overwrite_project_details {
            return diagnostics;
        }
        let external_user_management = target.has_external_user_management();

        for actor in &backup.project_role_actors {
            let role_name = mapper.project_roles.display_name(&actor.role_id);
            let member = actor.role_actor.as_str();
            match actor.kind() {
                RoleActorKind::User => {
                    if target.user_exists(member) {
                        continue;
                    }
                    if external_user_management {
                        diagnostics.add_warning(localizer.message(
                            keys::ROLE_ACTOR_USER_EXT_MGMT,
                            crate::args![member, role_name],
                        ));
                    } else if mapper.users.external_user(member).is_none() {
                        diagnostics.add_warning(localizer.message(
                            keys::ROLE_ACTOR_USER,
                            crate::args![member, role_name],
                        ));
                    }
                }
                RoleActorKind::Group => {
                    if mapper.groups.mapped_id(member).is_none() {
                        diagnostics.add_warning(localizer.message(
                            keys::ROLE_ACTOR_GROUP,
                            crate::args![member, role_name],
                        ));
                    }
                }
                RoleActorKind::Unknown(role_type) => {
                    diagnostics.add_warning(localizer.message(
                        keys::ROLE_ACTOR_UNKNOWN_TYPE,
                        crate::args![member, role_name, role_type],
                    ));
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::TargetSnapshot;
    use crate::model::{ExternalProjectRoleActor, ExternalUser};

    fn backup() -> BackupProject {
        let mut backup = BackupProject::new("PIG");
        backup.project_role_actors = vec![
            ExternalProjectRoleActor::user("1", "fred"),
            ExternalProjectRoleActor::user("1", "wilma"),
            ExternalProjectRoleActor::user("1", "barney"),
            ExternalProjectRoleActor::group("1", "developers"),
            ExternalProjectRoleActor::group("1", "testers"),
            ExternalProjectRoleActor {
                project_id: None,
                role_id: "1".to_string(),
                role_type: "robot-role-actor".to_string(),
                role_actor: "r2d2".to_string(),
            },
        ];
        backup
    }

    fn mapper() -> ProjectImportMapper {
        let mut mapper = ProjectImportMapper::default();
        mapper.project_roles.register_old_value("1", "Developers");
        mapper.groups.register_old_value("developers", "developers");
        mapper.groups.map_value("developers", "developers");
        mapper.users.register_user(ExternalUser::named("wilma"));
        mapper
    }

    fn target(external: bool) -> TargetSnapshot {
        TargetSnapshot {
            users: ["fred".to_string()].into_iter().collect(),
            external_user_management: external,
            ..TargetSnapshot::default()
        }
    }

    fn overwrite() -> ImportOptions {
        ImportOptions {
            overwrite_project_details: true,
        }
    }

    #[test]
    fn no_overwrite_means_no_checks() {
        let diagnostics = ProjectRoleActorMapperValidator.validate(
            &backup(),
            &ImportOptions::default(),
            &mapper(),
            &target(false),
            &Localizer::english(),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn internal_management_skips_creatable_users() {
        let diagnostics = ProjectRoleActorMapperValidator.validate(
            &backup(),
            &overwrite(),
            &mapper(),
            &target(false),
            &Localizer::english(),
        );
        assert!(!diagnostics.has_any_errors());
        let warnings: Vec<(&str, &str)> = diagnostics
            .warnings()
            .iter()
            .map(|m| (m.key.as_str(), m.args[0].as_str()))
            .collect();
        assert_eq!(
            warnings,
            vec![
                (keys::ROLE_ACTOR_USER, "barney"),
                (keys::ROLE_ACTOR_GROUP, "testers"),
                (keys::ROLE_ACTOR_UNKNOWN_TYPE, "r2d2"),
            ]
        );
        assert_eq!(diagnostics.warnings()[0].args[1], "Developers");
    }

    #[test]
    fn external_management_warns_for_every_missing_user() {
        let diagnostics = ProjectRoleActorMapperValidator.validate(
            &backup(),
            &overwrite(),
            &mapper(),
            &target(true),
            &Localizer::english(),
        );
        let users: Vec<&str> = diagnostics
            .warnings()
            .iter()
            .filter(|m| m.key == keys::ROLE_ACTOR_USER_EXT_MGMT)
            .map(|m| m.args[0].as_str())
            .collect();
        assert_eq!(users, vec!["wilma", "barney"]);
    }
}
