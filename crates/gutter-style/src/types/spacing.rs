//! Spacing configuration for grid item decorations.
//!
//! A [`Spacing`] describes every offset a decoration may apply:
//!
//! - `horizontal` / `vertical`: the gap between two adjacent items
//! - `edges`: margins applied only at the outer boundary of the grid
//! - `item`: padding added to every item unconditionally
//!
//! Values are validated when the configuration is built, so a [`Spacing`]
//! never holds a negative value.

use super::geometry::Insets;
use crate::StyleError;

/// A validated spacing configuration, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Spacing {
    horizontal: i32,
    vertical: i32,
    edges: Insets,
    item: Insets,
}

impl Spacing {
    /// A configuration with every value set to zero.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn builder() -> SpacingBuilder {
        SpacingBuilder::default()
    }

    /// Shorthand for a configuration with the same gap on both axes.
    pub fn uniform(gap: i32) -> Result<Self, StyleError> {
        Self::builder().gap(gap).build()
    }

    /// Horizontal gap between two adjacent items.
    pub fn horizontal(&self) -> i32 {
        self.horizontal
    }

    /// Vertical gap between two adjacent items.
    pub fn vertical(&self) -> i32 {
        self.vertical
    }

    /// Margins applied only at grid boundaries.
    pub fn edges(&self) -> Insets {
        self.edges
    }

    /// Padding applied to every item.
    pub fn item(&self) -> Insets {
        self.item
    }

    /// Start a builder pre-filled with this configuration.
    pub fn to_builder(&self) -> SpacingBuilder {
        SpacingBuilder {
            horizontal: self.horizontal,
            vertical: self.vertical,
            edges: self.edges,
            item: self.item,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.horizontal == 0
            && self.vertical == 0
            && self.edges.is_all_zeros()
            && self.item.is_all_zeros()
    }
}

/// Builder for [`Spacing`]. Nothing is validated until [`SpacingBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpacingBuilder {
    horizontal: i32,
    vertical: i32,
    edges: Insets,
    item: Insets,
}

impl SpacingBuilder {
    #[must_use]
    pub fn horizontal(mut self, gap: i32) -> Self {
        self.horizontal = gap;
        self
    }

    #[must_use]
    pub fn vertical(mut self, gap: i32) -> Self {
        self.vertical = gap;
        self
    }

    /// Set the same gap on both axes.
    #[must_use]
    pub fn gap(self, gap: i32) -> Self {
        self.horizontal(gap).vertical(gap)
    }

    #[must_use]
    pub fn edges(mut self, edges: Insets) -> Self {
        self.edges = edges;
        self
    }

    #[must_use]
    pub fn item(mut self, item: Insets) -> Self {
        self.item = item;
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// Fails with [`StyleError::NegativeSpacing`] naming the first negative value.
    pub fn build(self) -> Result<Spacing, StyleError> {
        if self.horizontal < 0 {
            return Err(StyleError::NegativeSpacing {
                field: "horizontal",
                value: self.horizontal,
            });
        }
        if self.vertical < 0 {
            return Err(StyleError::NegativeSpacing {
                field: "vertical",
                value: self.vertical,
            });
        }
        if let Some((side, value)) = self.edges.first_negative() {
            return Err(StyleError::NegativeSpacing {
                field: edge_field(side),
                value,
            });
        }
        if let Some((side, value)) = self.item.first_negative() {
            return Err(StyleError::NegativeSpacing {
                field: item_field(side),
                value,
            });
        }

        Ok(Spacing {
            horizontal: self.horizontal,
            vertical: self.vertical,
            edges: self.edges,
            item: self.item,
        })
    }
}

fn edge_field(side: &str) -> &'static str {
    match side {
        "left" => "edges.left",
        "top" => "edges.top",
        "right" => "edges.right",
        _ => "edges.bottom",
    }
}

fn item_field(side: &str) -> &'static str {
    match side {
        "left" => "item.left",
        "top" => "item.top",
        "right" => "item.right",
        _ => "item.bottom",
    }
}
