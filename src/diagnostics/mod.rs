//! Error and warning accumulation.
//!
//! A `Diagnostics` holds two ordered lists, errors and warnings. Adding a
//! message that is already present with the same severity (same key and
//! arguments) is a no-op, so insertion order is stable and repeat checks do
//! not produce duplicate lines.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hyperlink attached to a message, e.g. a details page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label_key: String,
    pub label: String,
    pub url: String,
}

/// One diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub key: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Text from the active resolver.
    pub text: String,
    /// Fixed English rendering, independent of the resolver.
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Messages of one severity in insertion order, unique by key and arguments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Message>", into = "Vec<Message>")]
struct MessageList {
    messages: Vec<Message>,
    seen: HashSet<(String, Vec<String>)>,
}

impl MessageList {
    fn push(&mut self, message: Message) {
        if self.seen.insert((message.key.clone(), message.args.clone())) {
            self.messages.push(message);
        }
    }
}

impl From<Vec<Message>> for MessageList {
    fn from(messages: Vec<Message>) -> Self {
        let mut list = Self::default();
        for message in messages {
            list.push(message);
        }
        list
    }
}

impl From<MessageList> for Vec<Message> {
    fn from(list: MessageList) -> Self {
        list.messages
    }
}

impl PartialEq for MessageList {
    fn eq(&self, other: &Self) -> bool {
        self.messages == other.messages
    }
}

impl Eq for MessageList {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    #[serde(default)]
    errors: MessageList,
    #[serde(default)]
    warnings: MessageList,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: Message) {
        self.errors.push(message);
    }

    pub fn add_warning(&mut self, message: Message) {
        self.warnings.push(message);
    }

    pub fn add(&mut self, severity: Severity, message: Message) {
        match severity {
            Severity::Error => self.add_error(message),
            Severity::Warning => self.add_warning(message),
        }
    }

    /// Merge `other` into `self`, keeping dedup semantics.
    pub fn add_all(&mut self, other: Self) {
        for message in other.errors.messages {
            self.add_error(message);
        }
        for message in other.warnings.messages {
            self.add_warning(message);
        }
    }

    #[must_use]
    pub fn has_any_errors(&self) -> bool {
        !self.errors.messages.is_empty()
    }

    #[must_use]
    pub fn has_any_warnings(&self) -> bool {
        !self.warnings.messages.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.messages.is_empty() && self.warnings.messages.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[Message] {
        &self.errors.messages
    }

    #[must_use]
    pub fn warnings(&self) -> &[Message] {
        &self.warnings.messages
    }

    /// Errors then warnings, each tagged with its severity.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &Message)> {
        self.errors
            .messages
            .iter()
            .map(|m| (Severity::Error, m))
            .chain(self.warnings.messages.iter().map(|m| (Severity::Warning, m)))
    }

    #[must_use]
    pub fn has_error_key(&self, key: &str) -> bool {
        self.errors.messages.iter().any(|m| m.key == key)
    }

    #[must_use]
    pub fn has_warning_key(&self, key: &str) -> bool {
        self.warnings.messages.iter().any(|m| m.key == key)
    }
}

/// Option diagnostics grouped by old custom field id.
///
/// A `None` bucket means the field's options were not checked because an
/// earlier stage failed.
pub type FieldDiagnostics = BTreeMap<String, Option<Diagnostics>>;
