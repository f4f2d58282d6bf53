//! Required-mapping validation for scalar entity types.

use crate::diagnostics::{Diagnostics, Severity};
use crate::i18n::{Localizer, keys};
use crate::mapping::MappingTable;
use tracing::debug;

/// Entity types validated with plain "is it mapped" semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleEntity {
    Priority,
    Resolution,
    Group,
    ProjectRole,
    SecurityLevel,
}

impl SimpleEntity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Resolution => "resolution",
            Self::Group => "group",
            Self::ProjectRole => "project role",
            Self::SecurityLevel => "issue security level",
        }
    }

    const fn does_not_exist_key(self) -> &'static str {
        match self {
            Self::Priority => keys::PRIORITY_DOES_NOT_EXIST,
            Self::Resolution => keys::RESOLUTION_DOES_NOT_EXIST,
            Self::Group => keys::GROUP_DOES_NOT_EXIST,
            Self::ProjectRole => keys::PROJECT_ROLE_DOES_NOT_EXIST,
            Self::SecurityLevel => keys::SECURITY_LEVEL_DOES_NOT_EXIST,
        }
    }

    /// A missing project role only loses a visibility restriction.
    const fn missing_severity(self) -> Severity {
        match self {
            Self::ProjectRole => Severity::Warning,
            _ => Severity::Error,
        }
    }

    const fn warns_on_orphan(self) -> bool {
        matches!(self, Self::SecurityLevel)
    }
}

/// Validates a scalar mapping table for one `SimpleEntity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleMappingValidator {
    entity: SimpleEntity,
}

impl SimpleMappingValidator {
    #[must_use]
    pub const fn new(entity: SimpleEntity) -> Self {
        Self { entity }
    }

    #[must_use]
    pub const fn entity(&self) -> SimpleEntity {
        self.entity
    }

    /// Report every required id that has no mapping.
    ///
    /// Ids the backup never defined are orphan data and only logged, except
    /// for security levels, which warn.
    #[must_use]
    pub fn validate(&self, table: &MappingTable, localizer: &Localizer<'_>) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for old_id in table.required_old_ids() {
            if table.mapped_id(old_id).is_some() {
                continue;
            }
            if table.key(old_id).is_none() {
                debug!(
                    entity = self.entity.as_str(),
                    old_id, "Dropping orphaned reference"
                );
                if self.entity.warns_on_orphan() {
                    diagnostics.add_warning(
                        localizer.message(keys::SECURITY_LEVEL_ORPHAN, crate::args![old_id]),
                    );
                }
                continue;
            }
            let message = localizer.message(
                self.entity.does_not_exist_key(),
                vec![table.display_name(old_id)],
            );
            diagnostics.add(self.entity.missing_severity(), message);
        }

        diagnostics
    }
}
