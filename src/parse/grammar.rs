use winnow::combinator::{alt, cut_err, empty, fail};
use winnow::token::rest;
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_until;

use crate::types::{FilterKind, RecipientKind, Token};

// -- Filter prefixes --------------------------------------------------------
// Longest prefixes first: "+regex" before "+", "-regex" before "-". The
// empty Normal prefix matches everything and must stay last.

fn filter_kind(input: &mut &str) -> ModalResult<FilterKind> {
    alt((
        "+regex".value(FilterKind::RequireRegex),
        "-regex".value(FilterKind::ExcludeRegex),
        "+".value(FilterKind::Include),
        "-".value(FilterKind::Exclude),
        empty.value(FilterKind::Normal),
    ))
    .parse_next(input)
}

// -- Recipient prefixes -----------------------------------------------------

fn recipient_kind(input: &mut &str) -> ModalResult<RecipientKind> {
    alt((
        "nation".value(RecipientKind::Nation),
        "region".value(RecipientKind::Region),
        "tag".value(RecipientKind::Tag),
        "flag".value(RecipientKind::Flag),
    ))
    .parse_next(input)
}

// -- Token ------------------------------------------------------------------

/// Parse one pre-trimmed token. With a recognized recipient prefix the name
/// is everything after the first `:` following it, and that `:` is
/// mandatory. Without one the remainder, less a single leading `:`, is read
/// as a bare nation name.
pub(crate) fn token(input: &mut &str) -> ModalResult<Token> {
    let filter = filter_kind.parse_next(input)?;
    let checkpoint = input.checkpoint();
    match recipient_kind.parse_next(input) {
        Ok(kind) => {
            let _skipped: &str = cut_err(take_until(0.., ':'))
                .context(StrContext::Expected(StrContextValue::Description(
                    "':' after recipient kind",
                )))
                .parse_next(input)?;
            let _ = ':'.parse_next(input)?;
            let name: &str = rest.parse_next(input)?;
            Ok(Token::new(filter, kind, name))
        }
        Err(_) => {
            input.reset(&checkpoint);
            let name: &str = rest.parse_next(input)?;
            let name = name.strip_prefix(':').unwrap_or(name);
            if name.is_empty() {
                // a filter prefix alone ("+", "-", ":") names nothing
                return cut_err(fail)
                    .context(StrContext::Expected(StrContextValue::Description(
                        "recipient name",
                    )))
                    .parse_next(input);
            }
            Ok(Token::new(filter, RecipientKind::Nation, name))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::parse;
    use crate::types::{FilterKind, RecipientKind, Tag, Token};

    #[test]
    fn parse_bare_name_is_nation() {
        let token = parse("imperium anglorum").unwrap();
        assert_eq!(token, Token::nation("imperium_anglorum"));
    }

    #[test]
    fn parse_explicit_kinds() {
        assert_eq!(parse("nation:alba").unwrap(), Token::nation("alba"));
        assert_eq!(parse("region:Europe").unwrap(), Token::region("europe"));
        assert_eq!(parse("tag:wa").unwrap(), Token::tag(Tag::Wa));
        assert_eq!(parse("flag:recruit").unwrap(), Token::flag("recruit"));
    }

    #[test]
    fn parse_filter_prefixes() {
        assert_eq!(
            parse("+region:europe").unwrap(),
            Token::region("europe").with_filter(FilterKind::Include)
        );
        assert_eq!(
            parse("-tag:new").unwrap(),
            Token::tag(Tag::New).with_filter(FilterKind::Exclude)
        );
    }

    #[test]
    fn regex_prefix_wins_over_include() {
        // must never be misread as Include of a nation named "regex:abc"
        let token = parse("+regex:abc").unwrap();
        assert_eq!(token.filter(), FilterKind::RequireRegex);
        assert_eq!(token.recipient(), RecipientKind::Nation);
        assert_eq!(token.name(), "abc");
    }

    #[test]
    fn exclude_regex_prefix_wins_over_exclude() {
        let token = parse("-regex:.*_rmb").unwrap();
        assert_eq!(token.filter(), FilterKind::ExcludeRegex);
        assert_eq!(token.name(), ".*_rmb");
    }

    #[test]
    fn regex_pattern_is_not_normalized() {
        let token = parse("+regex:[A-Z] .*").unwrap();
        assert_eq!(token.name(), "[A-Z] .*");
    }

    #[test]
    fn name_is_taken_after_first_colon() {
        let token = parse("tag:delegates").unwrap();
        assert_eq!(token.recipient(), RecipientKind::Tag);
        assert_eq!(token.name(), "delegates");
    }

    #[test]
    fn missing_colon_after_recipient_kind_is_malformed() {
        let err = parse("region").unwrap_err();
        assert!(err.to_string().contains("region"));
        assert!(parse("regionfoo").is_err());
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
    }

    #[test]
    fn filter_prefix_alone_is_malformed() {
        // an empty remainder after prefix stripping names nothing
        for text in ["+", "-", ":", "+regex:", "-regex:", "+:"] {
            assert!(parse(text).is_err(), "expected error for {text:?}");
        }
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(parse("  nation:alba  ").unwrap(), Token::nation("alba"));
    }

    #[test]
    fn names_are_normalized() {
        let token = parse("region:The North Pacific").unwrap();
        assert_eq!(token.name(), "the_north_pacific");
    }

    #[test]
    fn unrecognized_prefix_falls_back_to_nation() {
        // no recipient prefix matches, so the remainder is a bare name
        let token = parse("-foo:bar").unwrap();
        assert_eq!(token.filter(), FilterKind::Exclude);
        assert_eq!(token.recipient(), RecipientKind::Nation);
        assert_eq!(token.name(), "foo:bar");
    }

    #[test]
    fn round_trip_is_stable() {
        for text in [
            "nation:alba",
            "region:europe",
            "+region:europe",
            "-tag:new",
            "tag:delegates",
            "+regex:ab.*c",
            "-regex:x{2,3}",
            "flag:recruit",
        ] {
            let token = parse(text).unwrap();
            let reparsed = parse(&token.to_string()).unwrap();
            assert_eq!(token, reparsed, "round trip failed for {text}");
        }
    }
}
