//! Parsed spacing declarations and their resolution into a [`SpacingStyle`].

use nom::{IResult, combinator::all_consuming};

use super::units::{Length, LengthInsets, parse_length, parse_length_insets, parse_length_pair};
use super::values::parse_bool;
use crate::StyleError;
use crate::types::{Insets, RgbaColor, Spacing, SpacingStyle};

/// Which debug color a declaration sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugRole {
    Edge,
    Item,
    Horizontal,
    Vertical,
}

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Gap { vertical: Length, horizontal: Length },
    GapHorizontal(Length),
    GapVertical(Length),
    Edges(LengthInsets),
    Item(LengthInsets),
    SpanSizeAlwaysOne(bool),
    CacheGroupCount(bool),
    Debug(bool),
    DebugColor(DebugRole, RgbaColor),
}

impl Declaration {
    /// Parse the value of the property `name`.
    pub fn parse(name: &str, value: &str) -> Result<Self, StyleError> {
        let decl = match name {
            "gap" => {
                let (vertical, horizontal) = run(name, value, parse_length_pair)?;
                Declaration::Gap {
                    vertical,
                    horizontal,
                }
            }
            "gap-horizontal" => Declaration::GapHorizontal(run(name, value, parse_length)?),
            "gap-vertical" => Declaration::GapVertical(run(name, value, parse_length)?),
            "edges" => Declaration::Edges(run(name, value, parse_length_insets)?),
            "item" => Declaration::Item(run(name, value, parse_length_insets)?),
            "span-size-always-one" => {
                Declaration::SpanSizeAlwaysOne(run(name, value, parse_bool)?)
            }
            "cache-group-count" => Declaration::CacheGroupCount(run(name, value, parse_bool)?),
            "debug" => Declaration::Debug(run(name, value, parse_bool)?),
            "debug-edge-color" => Declaration::DebugColor(DebugRole::Edge, RgbaColor::parse(value)?),
            "debug-item-color" => Declaration::DebugColor(DebugRole::Item, RgbaColor::parse(value)?),
            "debug-horizontal-color" => {
                Declaration::DebugColor(DebugRole::Horizontal, RgbaColor::parse(value)?)
            }
            "debug-vertical-color" => {
                Declaration::DebugColor(DebugRole::Vertical, RgbaColor::parse(value)?)
            }
            _ => return Err(StyleError::UnknownProperty(name.to_string())),
        };
        Ok(decl)
    }
}

fn run<'a, O>(
    name: &str,
    value: &'a str,
    parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> Result<O, StyleError> {
    all_consuming(parser)(value.trim())
        .map(|(_, out)| out)
        .map_err(|e| StyleError::InvalidSyntax(format!("`{}: {}`: {}", name, value, e)))
}

const EDGE_FIELDS: [&str; 4] = ["edges.top", "edges.right", "edges.bottom", "edges.left"];
const ITEM_FIELDS: [&str; 4] = ["item.top", "item.right", "item.bottom", "item.left"];

/// A parsed spacing stylesheet: declarations in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    pub declarations: Vec<Declaration>,
}

impl StyleSheet {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Apply the declarations in order (later wins) and validate the result.
    ///
    /// `density` scales `dp` lengths into pixels.
    pub fn resolve(&self, density: f32) -> Result<SpacingStyle, StyleError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(StyleError::InvalidDensity(density));
        }

        let px = |field: &'static str, length: &Length| length.to_px(field, density);
        let insets = |fields: [&'static str; 4], l: &LengthInsets| -> Result<Insets, StyleError> {
            let [top, right, bottom, left] = fields;
            Ok(Insets::from_css(
                px(top, &l.top)?,
                px(right, &l.right)?,
                px(bottom, &l.bottom)?,
                px(left, &l.left)?,
            ))
        };

        let mut builder = Spacing::builder();
        let mut style = SpacingStyle::default();

        for decl in &self.declarations {
            match decl {
                Declaration::Gap {
                    vertical,
                    horizontal,
                } => {
                    builder = builder
                        .vertical(px("vertical", vertical)?)
                        .horizontal(px("horizontal", horizontal)?)
                }
                Declaration::GapHorizontal(length) => {
                    builder = builder.horizontal(px("horizontal", length)?)
                }
                Declaration::GapVertical(length) => builder = builder.vertical(px("vertical", length)?),
                Declaration::Edges(l) => builder = builder.edges(insets(EDGE_FIELDS, l)?),
                Declaration::Item(l) => builder = builder.item(insets(ITEM_FIELDS, l)?),
                Declaration::SpanSizeAlwaysOne(on) => style.span_size_always_one = *on,
                Declaration::CacheGroupCount(on) => style.cache_group_count = *on,
                Declaration::Debug(on) => style.debug = *on,
                Declaration::DebugColor(role, color) => match role {
                    DebugRole::Edge => style.palette.edge = *color,
                    DebugRole::Item => style.palette.item = *color,
                    DebugRole::Horizontal => style.palette.horizontal = *color,
                    DebugRole::Vertical => style.palette.vertical = *color,
                },
            }
        }

        style.spacing = builder.build()?;
        Ok(style)
    }
}
