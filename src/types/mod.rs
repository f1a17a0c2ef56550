mod error;
mod filter;
mod recipient;
mod roster;
mod token;

pub use error::EvalError;
pub use filter::FilterKind;
pub use recipient::{RecipientKind, Tag};
pub use roster::Roster;
pub use token::{reference_name, Token};
