//! Spacing stylesheet parsing.
//!
//! A spacing stylesheet is a flat list of `property: value;` declarations:
//!
//! - [`parse_stylesheet`]: Main entry point, returns a [`StyleSheet`]
//! - [`parse_style`]: Parse and resolve in one step (density 1.0)
//! - [`Declaration`]: A parsed property-value pair
//!
//! ## Submodules
//!
//! - [`stylesheet`]: Declarations and their resolution
//! - [`units`]: Length and unit parsing
//! - [`values`]: Identifiers, keywords and trivia
//!
//! ## Example
//!
//! ```rust
//! use gutter_style::parser::parse_stylesheet;
//!
//! let sheet = parse_stylesheet("gap: 8 16; edges: 4; /* debug */ debug: true;").unwrap();
//! let style = sheet.resolve(1.0).unwrap();
//!
//! assert_eq!(style.spacing.vertical(), 8);
//! assert_eq!(style.spacing.horizontal(), 16);
//! assert!(style.debug);
//! ```

pub mod stylesheet;
pub mod units;
pub mod values;

pub use crate::parser::stylesheet::{Declaration, DebugRole, StyleSheet};
pub use crate::parser::units::{Length, LengthInsets, Unit};

use crate::StyleError;
use crate::parser::values::{parse_ident, skip_trivia};
use crate::types::SpacingStyle;

use nom::{
    IResult,
    bytes::complete::take_till1,
    character::complete::char,
    combinator::opt,
    multi::many0,
    sequence::tuple,
};

/// Parses a full spacing stylesheet.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, StyleError> {
    let (remaining, raw) =
        many0(parse_raw_declaration)(source).map_err(|e| StyleError::InvalidSyntax(e.to_string()))?;

    let (remaining, _) =
        skip_trivia(remaining).map_err(|e| StyleError::InvalidSyntax(e.to_string()))?;
    if !remaining.is_empty() {
        return Err(StyleError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    let declarations = raw
        .into_iter()
        .map(|(name, value)| Declaration::parse(name, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StyleSheet::new(declarations))
}

/// Parses and resolves a stylesheet whose lengths are all in pixels.
pub fn parse_style(source: &str) -> Result<SpacingStyle, StyleError> {
    parse_stylesheet(source)?.resolve(1.0)
}

/// Splits one `name: value;` pair without interpreting the value.
fn parse_raw_declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = skip_trivia(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = tuple((skip_trivia, char(':'), skip_trivia))(input)?;
    let (input, value) = take_till1(|c: char| c == ';')(input)?;
    let (input, _) = opt(char(';'))(input)?;

    Ok((input, (name, value.trim())))
}
