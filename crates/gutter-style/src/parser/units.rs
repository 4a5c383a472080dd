use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, preceded, tuple},
};

use crate::error::StyleError;

/// Unit of a length value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Physical pixels.
    #[default]
    Px,
    /// Density-independent pixels, scaled by the display density.
    Dp,
}

/// A length as written in a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    pub fn dp(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Dp,
        }
    }

    /// Convert to whole pixels, truncating toward zero.
    ///
    /// `field` names the value in the error when the scaled length is
    /// negative (even a fraction of a pixel) or does not fit in an `i32`.
    pub fn to_px(&self, field: &'static str, density: f32) -> Result<i32, StyleError> {
        let scaled = match self.unit {
            Unit::Px => self.value,
            Unit::Dp => self.value * f64::from(density),
        };
        if !(0.0..=f64::from(i32::MAX)).contains(&scaled) {
            return Err(StyleError::LengthOutOfRange {
                field,
                value: self.value,
            });
        }
        Ok(scaled as i32)
    }
}

/// Four lengths in CSS order (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LengthInsets {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl LengthInsets {
    pub fn all(value: Length) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn vertical_horizontal(vertical: Length, horizontal: Length) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn parse_unit_suffix(input: &str) -> IResult<&str, Unit> {
    alt((map(tag("px"), |_| Unit::Px), map(tag("dp"), |_| Unit::Dp)))(input)
}

/// Parse a single length (e.g., "10", "12px", "8dp").
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let (input, _) = multispace0(input)?;
    let (input, value) = parse_number(input)?;
    let (input, unit) = opt(parse_unit_suffix)(input)?;

    Ok((
        input,
        Length {
            value,
            unit: unit.unwrap_or_default(),
        },
    ))
}

/// Parse one or two lengths: `<both>` or `<vertical> <horizontal>`.
pub fn parse_length_pair(input: &str) -> IResult<&str, (Length, Length)> {
    let (input, first) = parse_length(input)?;
    let (input, second) = opt(preceded(multispace1, parse_length))(input)?;
    Ok((input, (first, second.unwrap_or(first))))
}

/// Parse CSS-style insets.
/// Supports 1 value (all), 2 values (v, h), or 4 values (t, r, b, l).
pub fn parse_length_insets(input: &str) -> IResult<&str, LengthInsets> {
    let (input, first) = parse_length(input)?;
    let (input, second) = opt(preceded(multispace1, parse_length))(input)?;

    let Some(h) = second else {
        return Ok((input, LengthInsets::all(first)));
    };

    let (after_third, third) = opt(preceded(multispace1, parse_length))(input)?;
    let (after_fourth, fourth) = opt(preceded(multispace1, parse_length))(after_third)?;

    match (third, fourth) {
        (Some(b), Some(l)) => Ok((
            after_fourth,
            LengthInsets {
                top: first,
                right: h,
                bottom: b,
                left: l,
            },
        )),
        // A dangling third value is left unconsumed so the caller reports it.
        _ => Ok((input, LengthInsets::vertical_horizontal(first, h))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unitless_as_px() {
        let (_, length) = parse_length("12").unwrap();
        assert_eq!(length, Length::px(12.0));
    }

    #[test]
    fn parses_dp_suffix() {
        let (_, length) = parse_length("8dp").unwrap();
        assert_eq!(length, Length::dp(8.0));
    }

    #[test]
    fn dp_truncates_after_scaling() {
        assert_eq!(Length::dp(3.0).to_px("horizontal", 2.625), Ok(7));
        assert_eq!(Length::px(7.9).to_px("horizontal", 3.0), Ok(7));
    }

    #[test]
    fn negative_fractions_are_not_truncated_to_zero() {
        for length in [Length::px(-0.5), Length::dp(-0.5)] {
            assert_eq!(
                length.to_px("vertical", 2.0),
                Err(StyleError::LengthOutOfRange {
                    field: "vertical",
                    value: -0.5
                })
            );
        }
    }

    #[test]
    fn lengths_past_i32_are_rejected() {
        assert!(Length::px(99_999_999_999.0).to_px("edges.left", 1.0).is_err());
        // fits as dp, overflows once scaled
        assert!(Length::dp(2_000_000_000.0).to_px("item.top", 2.0).is_err());
        assert_eq!(
            Length::px(f64::from(i32::MAX)).to_px("item.top", 1.0),
            Ok(i32::MAX)
        );
    }

    #[test]
    fn three_values_leave_input() {
        let (rest, insets) = parse_length_insets("1 2 3").unwrap();
        assert_eq!(insets.top, Length::px(1.0));
        assert_eq!(insets.left, Length::px(2.0));
        assert_eq!(rest.trim(), "3");
    }
}
