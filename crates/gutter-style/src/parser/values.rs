//! Value parsing for spacing declarations.
//!
//! Lengths live in [`units`](super::units); this module covers the
//! identifiers, keywords and colors used by the remaining properties.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::multispace1,
    combinator::{recognize, value},
    multi::many0,
    sequence::tuple,
};

/// Parses an identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parses a boolean keyword (`true`/`false`, `yes`/`no`, `on`/`off`).
pub fn parse_bool(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, alt((tag("true"), tag("yes"), tag("on")))),
        value(false, alt((tag("false"), tag("no"), tag("off")))),
    ))(input)
}

/// Parses a `/* ... */` comment.
fn parse_comment(input: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}

/// Skips any run of whitespace and comments.
pub fn skip_trivia(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((multispace1, parse_comment))))(input)
}
