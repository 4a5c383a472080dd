//! Offset engine.
//!
//! Computes the four-sided offset of one item from its canonical placement.
//! For a grid with `cols` columns the horizontal gap is spread as a per-cell
//! delta:
//!
//! ```text
//! delta_h = (horizontal - edges.left - edges.right) / cols
//! left    = round(edges.left + item.left + col * delta_h)
//! right   = round(horizontal + item.left + item.right - left - col_span * delta_h)
//! ```
//!
//! so the right offset of one item plus the left offset of its neighbour is
//! always exactly the configured gap, and the outermost sides receive exactly
//! the edge margins. The vertical axis is symmetric.
//!
//! The derived constants only depend on the grid dimensions and the spacing,
//! so they are cached under an explicit [`CacheKey`] and recomputed whenever
//! either changes.

use gutter_style::{Insets, Spacing};

use crate::error::{GutterError, Result};
use crate::fraction::Fraction;
use crate::normalize::OffsetsRequest;

/// Identifies the inputs a set of [`DerivedConstants`] was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub rows: usize,
    pub cols: usize,
    /// Bumped on every spacing replacement or explicit invalidation.
    pub version: u64,
}

/// Per-grid-dimension constants shared by every item of one layout pass.
///
/// Held in `i64` so that sums of large `i32` spacing values cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedConstants {
    pub start_margin_h: i64,
    pub start_margin_v: i64,
    /// Gap plus item padding on both sides.
    pub pitch_h: i64,
    pub pitch_v: i64,
    pub delta_h: Fraction,
    pub delta_v: Fraction,
}

impl DerivedConstants {
    fn compute(spacing: &Spacing, rows: usize, cols: usize) -> Self {
        let edges = spacing.edges();
        let item = spacing.item();
        let (horizontal, vertical) = (i64::from(spacing.horizontal()), i64::from(spacing.vertical()));

        Self {
            start_margin_h: i64::from(edges.left) + i64::from(item.left),
            start_margin_v: i64::from(edges.top) + i64::from(item.top),
            pitch_h: horizontal + i64::from(item.left) + i64::from(item.right),
            pitch_v: vertical + i64::from(item.top) + i64::from(item.bottom),
            delta_h: Fraction::new(
                horizontal - i64::from(edges.left) - i64::from(edges.right),
                cols as i64,
            ),
            delta_v: Fraction::new(
                vertical - i64::from(edges.top) - i64::from(edges.bottom),
                rows as i64,
            ),
        }
    }
}

fn to_offset(side: &'static str, value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| GutterError::OffsetOverflow { side, value })
}

/// Calculates item offsets for one spacing configuration.
///
/// Not meant to be shared across threads; every call takes `&mut self`
/// because a lookup may refresh the cache.
#[derive(Debug, Clone)]
pub struct OffsetsCalculator {
    spacing: Spacing,
    version: u64,
    cache: Option<(CacheKey, DerivedConstants)>,
}

impl OffsetsCalculator {
    pub fn new(spacing: Spacing) -> Self {
        Self {
            spacing,
            version: 0,
            cache: None,
        }
    }

    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// Replace the spacing configuration. Cached constants become stale.
    pub fn set_spacing(&mut self, spacing: Spacing) {
        log::debug!("OffsetsCalculator: spacing replaced: {:?}", spacing);
        self.spacing = spacing;
        self.invalidate();
    }

    /// Force the derived constants to be recomputed on next use.
    pub fn invalidate(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// The key and constants currently cached, if any.
    pub fn cached(&self) -> Option<&(CacheKey, DerivedConstants)> {
        self.cache.as_ref()
    }

    /// Compute the offsets of the item described by `request`.
    pub fn compute_offsets(&mut self, request: &OffsetsRequest) -> Result<Insets> {
        if request.rows == 0 || request.cols == 0 {
            return Err(GutterError::InvalidGrid {
                rows: request.rows,
                cols: request.cols,
            });
        }
        if request.row_span == 0 || request.col_span == 0 {
            return Err(GutterError::InvalidSpan {
                row_span: request.row_span,
                col_span: request.col_span,
            });
        }

        let c = self.constants_for(request.rows, request.cols);

        let left = (Fraction::from(c.start_margin_h) + Fraction::from(request.col) * c.delta_h)
            .round();
        let top = (Fraction::from(c.start_margin_v) + Fraction::from(request.row) * c.delta_v)
            .round();
        let right = (Fraction::from(c.pitch_h - left)
            - Fraction::from(request.col_span) * c.delta_h)
            .round();
        let bottom = (Fraction::from(c.pitch_v - top)
            - Fraction::from(request.row_span) * c.delta_v)
            .round();

        Ok(Insets::new(
            to_offset("left", left)?,
            to_offset("top", top)?,
            to_offset("right", right)?,
            to_offset("bottom", bottom)?,
        ))
    }

    fn constants_for(&mut self, rows: usize, cols: usize) -> DerivedConstants {
        let key = CacheKey {
            rows,
            cols,
            version: self.version,
        };

        match self.cache {
            Some((cached_key, constants)) if cached_key == key => constants,
            _ => {
                let constants = DerivedConstants::compute(&self.spacing, rows, cols);
                log::trace!(
                    "OffsetsCalculator: recomputed constants for {}x{} (v{}): {:?}",
                    rows,
                    cols,
                    self.version,
                    constants
                );
                self.cache = Some((key, constants));
                constants
            }
        }
    }
}
