use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};

use crate::parse::{parse_lines, ParseError};
use crate::resolve::Resolver;
use crate::types::{EvalError, Roster, Token};

/// Cooperative cancellation flag for an in-flight evaluation.
///
/// Cloning shares the flag; hand a clone to the evaluating thread and call
/// [`cancel()`](CancelToken::cancel) from anywhere. The fold checks it before
/// each token's decomposition, so a cancelled evaluation never issues another
/// resolver call and never partially applies a decomposition.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// An ordered list of tokens, evaluated left to right.
///
/// Order is semantically load-bearing: later tokens observe the effect of
/// earlier ones, so `[region:europe, +tag:wa]` is the WA members of Europe
/// while `[+tag:wa, region:europe]` starts by intersecting an empty
/// accumulator. Each call to [`evaluate()`](Expression::evaluate) owns a
/// fresh accumulator; nothing is cached across evaluations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Build an expression from persisted text, one token per line, skipping
    /// blank and `#` comment lines.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first unparseable line.
    pub fn from_lines(input: &str) -> Result<Self, ParseError> {
        Ok(Self::from_tokens(parse_lines(input)?))
    }

    /// Append a token (fluent form).
    #[must_use]
    pub fn token(mut self, token: Token) -> Self {
        self.tokens.push(token);
        self
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Fold the token list into the final recipient roster.
    ///
    /// # Errors
    ///
    /// Returns the first [`EvalError`] encountered; there are no partial
    /// results and no retries.
    pub fn evaluate<R: Resolver>(&self, resolver: &R) -> Result<Roster, EvalError> {
        fold(&self.tokens, resolver, None)
    }

    /// Like [`evaluate()`](Expression::evaluate), but aborts with
    /// [`EvalError::Cancelled`] once `cancel` trips. The check runs before
    /// each token's decomposition.
    ///
    /// # Errors
    ///
    /// As [`evaluate()`](Expression::evaluate), plus [`EvalError::Cancelled`].
    pub fn evaluate_with_cancel<R: Resolver>(
        &self,
        resolver: &R,
        cancel: &CancelToken,
    ) -> Result<Roster, EvalError> {
        fold(&self.tokens, resolver, Some(cancel))
    }
}

impl FromIterator<Token> for Expression {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

fn fold<R: Resolver>(
    tokens: &[Token],
    resolver: &R,
    cancel: Option<&CancelToken>,
) -> Result<Roster, EvalError> {
    let mut roster = Roster::new();
    for token in tokens {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            debug!("evaluation cancelled before token '{token}'");
            return Err(EvalError::Cancelled);
        }
        roster = token.filter().apply(roster, token, resolver)?;
        trace!("token '{token}' applied, {} recipients", roster.len());
    }
    debug!(
        "expression of {} tokens resolved to {} recipients",
        tokens.len(),
        roster.len()
    );
    Ok(roster)
}
