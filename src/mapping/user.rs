//! User mapping.
//!
//! Users map to themselves: a user is "mapped" when the target already has
//! an account with the same name. Existence is asked of the target through
//! `UserLookup`, so the mapping only records what the backup said:
//! - mandatory users (reporters, assignees, ... that must exist),
//! - in-use users (referenced, but the import can proceed without them),
//! - registered users (the backup carried enough detail to create them).

use crate::lookup::UserLookup;
use crate::model::ExternalUser;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMapping {
    #[serde(default)]
    mandatory: BTreeSet<String>,
    #[serde(default)]
    in_use: BTreeSet<String>,
    #[serde(default)]
    registered: BTreeMap<String, ExternalUser>,
}

impl UserMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag_user_as_mandatory(&mut self, name: impl Into<String>) {
        self.mandatory.insert(name.into());
    }

    pub fn flag_user_as_in_use(&mut self, name: impl Into<String>) {
        self.in_use.insert(name.into());
    }

    pub fn register_user(&mut self, user: ExternalUser) {
        self.registered.insert(user.name.clone(), user);
    }

    /// Backup record for `name`; `None` means the import cannot create the user.
    #[must_use]
    pub fn external_user(&self, name: &str) -> Option<&ExternalUser> {
        self.registered.get(name)
    }

    /// Mandatory users the target does not have.
    pub fn unmapped_mandatory_users<'a>(
        &'a self,
        target: &'a impl UserLookup,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.mandatory
            .iter()
            .map(String::as_str)
            .filter(move |name| !target.user_exists(name))
    }

    /// In-use (optional) users the target does not have. A user that is also
    /// mandatory is counted only as mandatory.
    pub fn unmapped_optional_users<'a>(
        &'a self,
        target: &'a impl UserLookup,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.in_use
            .iter()
            .map(String::as_str)
            .filter(move |name| !self.mandatory.contains(*name))
            .filter(move |name| !target.user_exists(name))
    }

    #[must_use]
    pub fn unmapped_mandatory_users_without_details(&self, target: &impl UserLookup) -> usize {
        self.unmapped_mandatory_users(target)
            .filter(|name| !self.registered.contains_key(*name))
            .count()
    }

    #[must_use]
    pub fn unmapped_optional_users_without_details(&self, target: &impl UserLookup) -> usize {
        self.unmapped_optional_users(target)
            .filter(|name| !self.registered.contains_key(*name))
            .count()
    }

    /// Missing users, mandatory or optional, that the import would create.
    #[must_use]
    pub fn users_to_auto_create(&self, target: &impl UserLookup) -> usize {
        self.unmapped_mandatory_users(target)
            .chain(self.unmapped_optional_users(target))
            .filter(|name| self.registered.contains_key(*name))
            .count()
    }
}
