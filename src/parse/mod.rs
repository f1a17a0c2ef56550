mod error;
mod grammar;

pub use error::ParseError;

use crate::types::Token;

/// Parse a single token from its canonical text form.
///
/// The input is trimmed first. Filter prefixes are tried longest-first, then
/// recipient prefixes; a bare name with no recognized prefix is a nation.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is empty or a recognized recipient
/// prefix is not followed by a `:`.
pub fn parse(input: &str) -> Result<Token, ParseError> {
    use winnow::Parser;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(input, "empty token"));
    }
    grammar::token
        .parse(trimmed)
        .map_err(|e| ParseError::new(trimmed, e.to_string()))
}

/// Parse one token per line, skipping blank lines and `#` comment lines.
///
/// This is the format recipient lists are persisted in; the first error
/// aborts the whole read.
///
/// # Errors
///
/// Returns the [`ParseError`] of the first unparseable line.
pub fn parse_lines(input: &str) -> Result<Vec<Token>, ParseError> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse)
        .collect()
}
