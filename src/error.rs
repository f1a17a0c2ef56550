use thiserror::Error;

use crate::parse::ParseError;
use crate::types::EvalError;

/// Unified error type covering parsing and evaluation.
///
/// Returned by convenience paths that do both, such as parsing persisted
/// lines and evaluating them in one go; the stage-specific errors stay
/// available through `From`.
#[derive(Debug, Error)]
pub enum SendlistError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
