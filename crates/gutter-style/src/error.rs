//! Error types for spacing configuration and stylesheet parsing.
//!
//! Every error in this module is a configuration error: it is raised before any
//! offset is computed, and replaying the same input fails the same way.

use thiserror::Error;

use crate::types::color::ColorParseError;

/// Errors that can occur while building or parsing a spacing configuration.
///
/// # Examples
///
/// ```rust
/// use gutter_style::{Spacing, StyleError};
///
/// let result = Spacing::builder().horizontal(-5).build();
/// assert!(matches!(result, Err(StyleError::NegativeSpacing { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// A gap, edge margin or item padding value was negative.
    ///
    /// `field` names the offending value, e.g. `horizontal` or `edges.left`.
    #[error("spacing value `{field}` must not be negative (got {value})")]
    NegativeSpacing { field: &'static str, value: i32 },

    /// A stylesheet length was negative or too large once converted to pixels.
    #[error("length `{field}` must resolve to 0..=2147483647 px (got {value})")]
    LengthOutOfRange { field: &'static str, value: f64 },

    /// Invalid declaration syntax was encountered during parsing.
    #[error("spacing syntax error: {0}")]
    InvalidSyntax(String),

    /// A declaration named a property this parser does not know.
    #[error("unknown spacing property: {0}")]
    UnknownProperty(String),

    /// A color declaration could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// A `dp` length was resolved with a non-positive or non-finite density.
    #[error("invalid display density: {0}")]
    InvalidDensity(f32),
}
