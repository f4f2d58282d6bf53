//! Message resolution.
//!
//! Validators never build user-facing text themselves. They name a key and
//! positional arguments, and a `Localizer` turns that into a `Message` holding
//! the localized text plus a fixed English rendering for logs and exports.

mod catalog;
pub mod keys;

pub use catalog::MessageCatalog;

use crate::diagnostics::{Link, Message};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("valid regex"));

/// Turns a message key and positional arguments into text.
pub trait MessageResolver {
    fn resolve(&self, key: &str, args: &[String]) -> String;
}

/// Substitute `{0}`, `{1}`, ... with `args`. Placeholders without a matching
/// argument are left as written.
#[must_use]
pub fn render(template: &str, args: &[String]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map_or_else(|| caps[0].to_string(), Clone::clone)
        })
        .into_owned()
}

/// Builds `Message`s from keys using a resolver plus the English catalogue.
#[derive(Clone, Copy)]
pub struct Localizer<'a> {
    resolver: &'a dyn MessageResolver,
}

impl std::fmt::Debug for Localizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer").finish_non_exhaustive()
    }
}

impl Default for Localizer<'static> {
    fn default() -> Self {
        Self::english()
    }
}

impl<'a> Localizer<'a> {
    #[must_use]
    pub fn new(resolver: &'a dyn MessageResolver) -> Self {
        Self { resolver }
    }

    #[must_use]
    pub fn english() -> Localizer<'static> {
        Localizer {
            resolver: MessageCatalog::english(),
        }
    }

    /// Localized text only.
    #[must_use]
    pub fn text(&self, key: &str, args: &[String]) -> String {
        self.resolver.resolve(key, args)
    }

    #[must_use]
    pub fn message(&self, key: &str, args: Vec<String>) -> Message {
        Message {
            text: self.resolver.resolve(key, &args),
            english: MessageCatalog::english().resolve(key, &args),
            key: key.to_string(),
            args,
            link: None,
        }
    }

    #[must_use]
    pub fn message_with_link(&self, key: &str, args: Vec<String>, link: Link) -> Message {
        Message {
            link: Some(link),
            ..self.message(key, args)
        }
    }

    #[must_use]
    pub fn link(&self, label_key: &str, url: impl Into<String>) -> Link {
        Link {
            label_key: label_key.to_string(),
            label: self.resolver.resolve(label_key, &[]),
            url: url.into(),
        }
    }
}

/// Convenience for building positional arguments.
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$($arg.to_string()),*]
    };
}
