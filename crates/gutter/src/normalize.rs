//! Position normalization.
//!
//! Translates an item's host addressing (scroll-axis group, cross-axis span
//! index, span size) into canonical grid coordinates where row 0 is on top
//! and column 0 is on the left, whatever the orientation or reversal of the
//! host layout. The offset engine only ever sees the canonical form.

use crate::arrangement::{Direction, SpanSizeLookup, clamp_span};
use crate::error::{GutterError, Result};

/// Host-oriented description of one item's place in its arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemOffsetsParams {
    /// Cross-axis cell the item starts at.
    pub span_index: usize,
    /// Scroll-axis group (row for vertical layouts) the item belongs to.
    pub group_index: usize,
    /// Cross-axis cells the item covers.
    pub span_size: usize,
    pub span_count: usize,
    pub group_count: usize,
    pub direction: Direction,
}

impl Default for ItemOffsetsParams {
    fn default() -> Self {
        Self {
            span_index: 0,
            group_index: 0,
            span_size: 1,
            span_count: 1,
            group_count: 1,
            direction: Direction::vertical(),
        }
    }
}

/// Canonical placement of one item in a grid table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetsRequest {
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
    /// Total rows of the grid.
    pub rows: usize,
    /// Total columns of the grid.
    pub cols: usize,
}

impl OffsetsRequest {
    /// A single-cell placement.
    pub fn cell(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
            rows,
            cols,
        }
    }

    #[must_use]
    pub fn with_span(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }

    pub fn last_row(&self) -> usize {
        self.row + self.row_span.max(1) - 1
    }

    pub fn last_col(&self) -> usize {
        self.col + self.col_span.max(1) - 1
    }

    pub fn is_first_row(&self) -> bool {
        self.row == 0
    }

    pub fn is_first_col(&self) -> bool {
        self.col == 0
    }

    pub fn is_last_row(&self) -> bool {
        self.last_row() + 1 >= self.rows
    }

    pub fn is_last_col(&self) -> bool {
        self.last_col() + 1 >= self.cols
    }
}

/// Map host addressing to canonical coordinates.
///
/// When the direction resolves reversed, the group index is mirrored:
/// `group_count - group_index - 1`. Vertical layouts put groups on rows and
/// spans on columns; horizontal layouts transpose that.
pub fn normalize(params: &ItemOffsetsParams) -> Result<OffsetsRequest> {
    if params.span_count == 0 || params.group_count == 0 {
        return Err(GutterError::InvalidGrid {
            rows: if params.direction.is_vertical() {
                params.group_count
            } else {
                params.span_count
            },
            cols: if params.direction.is_vertical() {
                params.span_count
            } else {
                params.group_count
            },
        });
    }

    let group_index = params.group_index.min(params.group_count - 1);
    let group = if params.direction.resolves_reversed() {
        params.group_count - group_index - 1
    } else {
        group_index
    };

    let request = if params.direction.is_vertical() {
        OffsetsRequest {
            row: group,
            col: params.span_index,
            row_span: 1,
            col_span: params.span_size,
            rows: params.group_count,
            cols: params.span_count,
        }
    } else {
        OffsetsRequest {
            row: params.span_index,
            col: group,
            row_span: params.span_size,
            col_span: 1,
            rows: params.span_count,
            cols: params.group_count,
        }
    };

    Ok(request)
}

/// Whether `position` sits in the first group of a grid with variable spans.
///
/// Walks span sizes from the start until the running total exceeds
/// `span_count`. O(position).
pub fn is_in_first_group(
    position: usize,
    lookup: &dyn SpanSizeLookup,
    span_count: usize,
) -> bool {
    let mut total = 0;
    for i in 0..=position {
        total += clamp_span(lookup.span_size(i), span_count);
        if total > span_count {
            return false;
        }
    }
    true
}

/// Whether `position` sits in the last group of a grid with variable spans.
///
/// Compares group indices with the last item, so a partially filled last
/// group does not pull items of the group before it in. O(item_count).
pub fn is_in_last_group(
    position: usize,
    item_count: usize,
    lookup: &dyn SpanSizeLookup,
    span_count: usize,
) -> bool {
    if position + 1 >= item_count {
        return true;
    }
    lookup.span_group_index(position, span_count)
        == lookup.span_group_index(item_count - 1, span_count)
}
