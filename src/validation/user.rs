//! User validation.
//!
//! Users are reported in aggregate: one message per non-empty bucket, carrying
//! the count and a link to the page listing the users.

use crate::diagnostics::Diagnostics;
use crate::i18n::{Localizer, keys};
use crate::lookup::UserLookup;
use crate::mapping::UserMapping;
use serde::{Deserialize, Serialize};

/// Detail pages linked from the user summary messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLinks {
    pub ext_mgmt_mandatory: String,
    pub ext_mgmt_optional: String,
    pub cannot_create_mandatory: String,
    pub cannot_create_optional: String,
    pub auto_create: String,
}

impl Default for UserLinks {
    fn default() -> Self {
        Self {
            ext_mgmt_mandatory: "ProjectImportMissingMandatoryUsersExtMgmt.jspa".to_string(),
            ext_mgmt_optional: "ProjectImportMissingOptionalUsersExtMgmt.jspa".to_string(),
            cannot_create_mandatory: "ProjectImportMissingMandatoryUsersCannotCreate.jspa"
                .to_string(),
            cannot_create_optional: "ProjectImportMissingOptionalUsersCannotCreate.jspa"
                .to_string(),
            auto_create: "ProjectImportMissingUsersAutoCreate.jspa".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMapperValidator {
    links: UserLinks,
}

impl UserMapperValidator {
    #[must_use]
    pub const fn new(links: UserLinks) -> Self {
        Self { links }
    }

    #[must_use]
    pub const fn links(&self) -> &UserLinks {
        &self.links
    }

    #[must_use]
    pub fn validate(
        &self,
        users: &UserMapping,
        target: &impl UserLookup,
        localizer: &Localizer<'_>,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        let details = |url: &str| localizer.link(keys::USERS_VIEW_DETAILS, url);

        if target.has_external_user_management() {
            let mandatory = users.unmapped_mandatory_users(target).count();
            if mandatory > 0 {
                diagnostics.add_error(localizer.message_with_link(
                    keys::USERS_EXT_MGMT_MISSING_MANDATORY,
                    crate::args![mandatory],
                    details(&self.links.ext_mgmt_mandatory),
                ));
            }
            let optional = users.unmapped_optional_users(target).count();
            if optional > 0 {
                diagnostics.add_warning(localizer.message_with_link(
                    keys::USERS_EXT_MGMT_MISSING_OPTIONAL,
                    crate::args![optional],
                    details(&self.links.ext_mgmt_optional),
                ));
            }
            return diagnostics;
        }

        let mandatory = users.unmapped_mandatory_users_without_details(target);
        if mandatory > 0 {
            diagnostics.add_error(localizer.message_with_link(
                keys::USERS_MISSING_MANDATORY_CANNOT_CREATE,
                crate::args![mandatory],
                details(&self.links.cannot_create_mandatory),
            ));
        }
        let optional = users.unmapped_optional_users_without_details(target);
        if optional > 0 {
            diagnostics.add_warning(localizer.message_with_link(
                keys::USERS_MISSING_OPTIONAL_CANNOT_CREATE,
                crate::args![optional],
                details(&self.links.cannot_create_optional),
            ));
        }
        let auto_create = users.users_to_auto_create(target);
        if auto_create > 0 {
            diagnostics.add_warning(localizer.message_with_link(
                keys::USERS_WILL_BE_CREATED,
                crate::args![auto_create],
                details(&self.links.auto_create),
            ));
        }

        diagnostics
    }
}
