use std::fmt;

/// A token that could not be parsed. Carries the offending text so callers
/// can render an actionable message.
#[derive(Debug)]
pub struct ParseError {
    token: String,
    message: String,
}

impl ParseError {
    pub(crate) fn new(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            message: message.into(),
        }
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed token '{}': {}", self.token, self.message)
    }
}

impl std::error::Error for ParseError {}
