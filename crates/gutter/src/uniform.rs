//! Uniform spacing: half the gap on every side that faces another item.
//!
//! A simpler alternative to the grid offset engine. It has no edge margins or
//! item padding; each inner side of an item receives `gap / 2`, so two
//! neighbours add up to the gap (minus one pixel for odd gaps), and sides on
//! the outer boundary receive nothing.

use gutter_style::{Insets, StyleError};

use crate::arrangement::{Arrangement, Direction, ListItem, ListSurface};
use crate::error::{GutterError, Result};

/// Which sides of an item face a neighbour, in unflipped layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct InnerSides {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
}

/// Equal spacing between items of a linear list or a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniformSpacing {
    px_between_items: i32,
}

impl UniformSpacing {
    /// Fails with a configuration error when `px_between_items` is negative.
    pub fn new(px_between_items: i32) -> Result<Self> {
        if px_between_items < 0 {
            return Err(StyleError::NegativeSpacing {
                field: "px_between_items",
                value: px_between_items,
            }
            .into());
        }
        Ok(Self { px_between_items })
    }

    pub fn px_between_items(&self) -> i32 {
        self.px_between_items
    }

    /// Offsets for `item`. Items without a position get no offsets.
    pub fn item_offsets(&self, surface: &ListSurface, item: &ListItem) -> Result<Insets> {
        let Some(position) = item.position else {
            return Ok(Insets::ZERO);
        };

        let arrangement = surface
            .arrangement
            .as_ref()
            .ok_or(GutterError::MissingArrangement)?;

        let (direction, sides) = match arrangement {
            Arrangement::Linear(direction) => (
                *direction,
                linear_sides(*direction, position, surface.item_count),
            ),
            Arrangement::Grid(grid) => {
                let span_count = grid.clamped_span_count();
                let spans = &grid.spans;
                let span_size = spans.span_size(position, span_count);
                let span_index = spans.span_index(position, span_count);

                let placement = GridPlacement {
                    first_in_group: span_index == 0,
                    fills_last_span: span_index + span_size == span_count,
                    in_first_group: spans.is_in_first_group(position, span_count),
                    in_last_group: spans.is_in_last_group(position, surface.item_count, span_count),
                };
                (grid.direction, grid_sides(grid.direction, placement))
            }
            other => {
                return Err(GutterError::UnsupportedArrangement(format!(
                    "uniform spacing supports linear and grid arrangements, not {}",
                    other.kind_name()
                )));
            }
        };

        let mut sides = sides;
        if direction.resolves_reversed() {
            if direction.is_vertical() {
                std::mem::swap(&mut sides.top, &mut sides.bottom);
            } else {
                std::mem::swap(&mut sides.left, &mut sides.right);
            }
        }

        // Divided by two: each gap is shared by the two items facing it.
        let padding = self.px_between_items / 2;
        let side = |inner: bool| if inner { padding } else { 0 };

        Ok(Insets::new(
            side(sides.left),
            side(sides.top),
            side(sides.right),
            side(sides.bottom),
        ))
    }
}

fn linear_sides(direction: Direction, position: usize, item_count: usize) -> InnerSides {
    let first = position == 0;
    let last = position + 1 >= item_count;

    if direction.is_vertical() {
        InnerSides {
            top: !first,
            bottom: !last,
            ..InnerSides::default()
        }
    } else {
        InnerSides {
            left: !first,
            right: !last,
            ..InnerSides::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct GridPlacement {
    /// First cell across the cross axis.
    first_in_group: bool,
    /// Reaches the last cell across the cross axis.
    fills_last_span: bool,
    in_first_group: bool,
    in_last_group: bool,
}

fn grid_sides(direction: Direction, p: GridPlacement) -> InnerSides {
    if direction.is_vertical() {
        InnerSides {
            left: !p.first_in_group,
            right: !p.fills_last_span,
            top: !p.in_first_group,
            bottom: !p.in_last_group,
        }
    } else {
        InnerSides {
            left: !p.in_first_group,
            right: !p.in_last_group,
            top: !p.first_in_group,
            bottom: !p.fills_last_span,
        }
    }
}
