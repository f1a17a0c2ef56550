use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use super::error::EvalError;
use super::roster::Roster;
use super::token::Token;
use crate::resolve::Resolver;

/// How a token combines with the accumulated recipient set.
///
/// Variants are listed in parse priority order: the regex prefixes must be
/// tried before the bare `+`/`-` prefixes, and `Normal` (the empty prefix,
/// which matches everything) must stay last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// `+regex`: keep only accumulator entries fully matching the pattern.
    RequireRegex,
    /// `-regex`: drop accumulator entries fully matching the pattern.
    ExcludeRegex,
    /// `+`: intersect the accumulator with the token's decomposition.
    Include,
    /// `-`: subtract the token's decomposition from the accumulator.
    Exclude,
    /// No prefix: append the token's decomposition to the accumulator.
    Normal,
}

impl FilterKind {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            FilterKind::RequireRegex => "+regex",
            FilterKind::ExcludeRegex => "-regex",
            FilterKind::Include => "+",
            FilterKind::Exclude => "-",
            FilterKind::Normal => "",
        }
    }

    /// Whether this kind interprets the token name as a raw regex pattern.
    #[must_use]
    pub fn is_regex(self) -> bool {
        matches!(self, FilterKind::RequireRegex | FilterKind::ExcludeRegex)
    }

    /// Apply `token` to the accumulator under this kind's set semantics.
    ///
    /// Regex kinds never touch the resolver; the other kinds decompose the
    /// token first and operate on the resulting name set.
    pub(crate) fn apply<R: Resolver>(
        self,
        mut roster: Roster,
        token: &Token,
        resolver: &R,
    ) -> Result<Roster, EvalError> {
        match self {
            FilterKind::Normal => {
                roster.extend(token.decompose(resolver)?);
                Ok(roster)
            }
            FilterKind::Include => {
                let names: HashSet<String> = token.decompose(resolver)?.into_iter().collect();
                roster.retain(|name| names.contains(name));
                Ok(roster)
            }
            FilterKind::Exclude => {
                let names: HashSet<String> = token.decompose(resolver)?.into_iter().collect();
                roster.retain(|name| !names.contains(name));
                Ok(roster)
            }
            FilterKind::RequireRegex => {
                let pattern = compile_full_match(token.name())?;
                roster.retain(|name| pattern.is_match(name));
                Ok(roster)
            }
            FilterKind::ExcludeRegex => {
                let pattern = compile_full_match(token.name())?;
                roster.retain(|name| !pattern.is_match(name));
                Ok(roster)
            }
        }
    }
}

/// Compile a pattern with whole-string anchoring. Case-sensitive; names in
/// the accumulator are already reference form, so patterns match against
/// lowercase underscored text.
fn compile_full_match(pattern: &str) -> Result<Regex, EvalError> {
    Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| EvalError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
