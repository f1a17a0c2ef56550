use std::fmt;

use super::filter::FilterKind;
use super::recipient::{RecipientKind, Tag};

/// Normalize a name into reference form: trimmed, lower-cased, with internal
/// whitespace runs collapsed to a single `_`.
#[must_use]
pub fn reference_name(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut pending_gap = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            pending_gap = true;
        } else {
            if pending_gap {
                out.push('_');
                pending_gap = false;
            }
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// A single recipient-expression entry: a filter kind, a recipient kind, and
/// a name. Immutable once constructed.
///
/// The name is stored in reference form, except for regex filter kinds where
/// it is the raw pattern (regex matching is case-sensitive, so the pattern
/// must survive untouched).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    filter: FilterKind,
    recipient: RecipientKind,
    name: String,
}

impl Token {
    pub fn new(filter: FilterKind, recipient: RecipientKind, name: impl Into<String>) -> Self {
        let raw = name.into();
        let name = if filter.is_regex() {
            raw
        } else {
            reference_name(&raw)
        };
        Self {
            filter,
            recipient,
            name,
        }
    }

    /// A plain nation token (`FilterKind::Normal`), the default reading of a
    /// bare name.
    pub fn nation(name: impl Into<String>) -> Self {
        Self::new(FilterKind::Normal, RecipientKind::Nation, name)
    }

    /// A region token (`FilterKind::Normal`).
    pub fn region(name: impl Into<String>) -> Self {
        Self::new(FilterKind::Normal, RecipientKind::Region, name)
    }

    /// A token for one of the recognized tags (`FilterKind::Normal`).
    pub fn tag(tag: Tag) -> Self {
        Self::new(FilterKind::Normal, RecipientKind::Tag, tag.as_str())
    }

    /// An internal marker token. Flags decompose to nothing and are never
    /// sent to.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(FilterKind::Normal, RecipientKind::Flag, name)
    }

    /// Rebuild this token with a different filter kind. Re-applies name
    /// normalization rules for the new kind.
    #[must_use]
    pub fn with_filter(self, filter: FilterKind) -> Self {
        Self::new(filter, self.recipient, self.name)
    }

    #[must_use]
    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    #[must_use]
    pub fn recipient(&self) -> RecipientKind {
        self.recipient
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Token {
    /// The canonical text form: filter prefix, recipient prefix, `:`, name.
    /// This is the stable persistence format; [`parse()`](crate::parse())
    /// inverts it exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}",
            self.filter.prefix(),
            self.recipient.prefix(),
            self.name
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Token {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::parse(&s).map_err(serde::de::Error::custom)
    }
}
