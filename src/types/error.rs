use thiserror::Error;

use crate::resolve::ResolveError;

/// Errors produced while evaluating a recipient expression.
///
/// All variants are evaluation-fatal: an expression either fully resolves or
/// fails as a whole. Silently dropping a sub-expression could produce a
/// materially different recipient set for a messaging action.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unknown tag in token '{token}'")]
    UnknownTag { token: String },

    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("could not resolve '{token}'")]
    ResolutionFailure {
        token: String,
        #[source]
        source: ResolveError,
    },

    #[error("evaluation cancelled")]
    Cancelled,
}
