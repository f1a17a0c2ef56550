use std::fmt;

use super::error::EvalError;
use super::token::{reference_name, Token};
use crate::resolve::{Query, Resolver};

/// What a token's name refers to, and therefore how it decomposes into
/// concrete nation names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipientKind {
    /// A single nation; decomposes to itself.
    Nation,
    /// A region; decomposes to its member nations via the resolver.
    Region,
    /// One of the recognized [`Tag`]s; decomposes via the resolver.
    Tag,
    /// An internal marker carried through configuration. Decomposes to
    /// nothing and never triggers a resolver call.
    Flag,
}

impl RecipientKind {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            RecipientKind::Nation => "nation",
            RecipientKind::Region => "region",
            RecipientKind::Tag => "tag",
            RecipientKind::Flag => "flag",
        }
    }

    /// Expand a token of this kind into raw nation reference names.
    ///
    /// Resolver output is untrusted text and is normalized to reference form
    /// on receipt; empty entries are dropped.
    pub(crate) fn decompose<R: Resolver>(
        self,
        token: &Token,
        resolver: &R,
    ) -> Result<Vec<String>, EvalError> {
        let query = match self {
            RecipientKind::Nation => return Ok(vec![token.name().to_owned()]),
            RecipientKind::Flag => return Ok(Vec::new()),
            RecipientKind::Region => Query::Region(token.name()),
            RecipientKind::Tag => match Tag::from_name(token.name()) {
                Some(Tag::Wa) => Query::WaMembers,
                Some(Tag::Delegates) => Query::Delegates,
                Some(Tag::New) => Query::NewNations,
                Some(Tag::All) => Query::AllNations,
                None => {
                    return Err(EvalError::UnknownTag {
                        token: token.to_string(),
                    })
                }
            },
        };
        let raw = resolver
            .resolve(query)
            .map_err(|source| EvalError::ResolutionFailure {
                token: token.to_string(),
                source,
            })?;
        Ok(raw
            .iter()
            .map(|name| reference_name(name))
            .filter(|name| !name.is_empty())
            .collect())
    }
}

impl fmt::Display for RecipientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// The recognized tag names. Anything else after `tag:` is a hard
/// [`EvalError::UnknownTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// All World Assembly members.
    Wa,
    /// Current World Assembly delegates.
    Delegates,
    /// Recently founded nations.
    New,
    /// Every nation.
    All,
}

impl Tag {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Tag> {
        match name {
            "wa" => Some(Tag::Wa),
            "delegates" => Some(Tag::Delegates),
            "new" => Some(Tag::New),
            "all" => Some(Tag::All),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Wa => "wa",
            Tag::Delegates => "delegates",
            Tag::New => "new",
            Tag::All => "all",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Decompose this token into concrete nation reference names, consulting
    /// `resolver` for region and tag tokens.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnknownTag`] for an unrecognized tag name and
    /// [`EvalError::ResolutionFailure`] if the resolver fails. Either aborts
    /// the evaluation this decomposition is part of.
    pub fn decompose<R: Resolver>(&self, resolver: &R) -> Result<Vec<String>, EvalError> {
        self.recipient().decompose(self, resolver)
    }
}
