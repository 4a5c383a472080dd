//! Colors of the spacing debug palette.
//!
//! Accepted forms: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`,
//! `rgba(r, g, b, a)` with `a` in `0.0..=1.0`, and a few CSS names.

use std::fmt;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, multispace0, u8 as dec_u8},
    combinator::{all_consuming, map, opt},
    number::complete::float,
    sequence::{delimited, preceded, terminated, tuple},
};
use thiserror::Error;

/// Error returned when a color value cannot be parsed.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ColorParseError {
    pub message: String,
}

impl ColorParseError {
    fn invalid(input: &str) -> Self {
        Self {
            message: format!("invalid color: {:?}", input),
        }
    }
}

/// An sRGB color with straight alpha.
///
/// ```
/// use gutter_style::RgbaColor;
///
/// let red = RgbaColor::rgb(255, 0, 0);
/// assert_eq!(RgbaColor::parse("#ff0000").unwrap(), red);
/// assert_eq!(RgbaColor::parse("red").unwrap(), red);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 is transparent, 1.0 opaque.
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl RgbaColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if let Some(color) = named(&lower) {
            return Ok(color);
        }

        all_consuming(alt((hex_color, rgb_function)))(lower.as_str())
            .map(|(_, color)| color)
            .map_err(|_| ColorParseError::invalid(trimmed))
    }
}

fn named(name: &str) -> Option<RgbaColor> {
    let color = match name {
        "transparent" => RgbaColor::rgba(0, 0, 0, 0.0),
        "black" => RgbaColor::rgb(0, 0, 0),
        "white" => RgbaColor::rgb(255, 255, 255),
        "red" => RgbaColor::rgb(255, 0, 0),
        "green" => RgbaColor::rgb(0, 128, 0),
        "lime" => RgbaColor::rgb(0, 255, 0),
        "blue" => RgbaColor::rgb(0, 0, 255),
        "yellow" => RgbaColor::rgb(255, 255, 0),
        "cyan" | "aqua" => RgbaColor::rgb(0, 255, 255),
        "magenta" | "fuchsia" => RgbaColor::rgb(255, 0, 255),
        "orange" => RgbaColor::rgb(255, 165, 0),
        "gray" | "grey" => RgbaColor::rgb(128, 128, 128),
        _ => return None,
    };
    Some(color)
}

fn hex_color(input: &str) -> IResult<&str, RgbaColor> {
    let (rest, digits) = preceded(
        char('#'),
        take_while_m_n(3, 8, |c: char| c.is_ascii_hexdigit()),
    )(input)?;

    // Short forms repeat each nibble: "f" -> "ff".
    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|n| (n * 17) as u8)
            .collect(),
        6 | 8 => (0..digits.len())
            .step_by(2)
            .filter_map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
            .collect(),
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::LengthValue,
            )));
        }
    };

    let alpha = channels.get(3).map_or(1.0, |a| f32::from(*a) / 255.0);
    Ok((
        rest,
        RgbaColor::rgba(channels[0], channels[1], channels[2], alpha),
    ))
}

fn component<'a, O>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(multispace0, parser, multispace0)
}

fn rgb_function(input: &str) -> IResult<&str, RgbaColor> {
    let (rest, _) = alt((tag("rgba"), tag("rgb")))(input)?;
    delimited(
        char('('),
        map(
            tuple((
                terminated(component(dec_u8), char(',')),
                terminated(component(dec_u8), char(',')),
                component(dec_u8),
                opt(preceded(char(','), component(float))),
            )),
            |(r, g, b, a)| RgbaColor::rgba(r, g, b, a.unwrap_or(1.0).clamp(0.0, 1.0)),
        ),
        char(')'),
    )(rest)
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a < 1.0 {
            write!(f, "{:02X}", (self.a.clamp(0.0, 1.0) * 255.0).round() as u8)?;
        }
        Ok(())
    }
}
