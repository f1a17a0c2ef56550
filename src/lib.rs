mod error;
mod evaluate;
mod parse;
mod process;
mod resolve;
mod types;

pub use error::SendlistError;
pub use evaluate::{CancelToken, Expression};
pub use parse::{parse, parse_lines, ParseError};
pub use process::ProcessingAction;
pub use resolve::{Classifier, MemoryResolver, Query, ResolveError, Resolver};
pub use types::{reference_name, EvalError, FilterKind, RecipientKind, Roster, Tag, Token};
