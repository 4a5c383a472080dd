//! Spacing decoration attached to one list surface.
//!
//! [`SpacingDecoration`] owns the offset calculator, its behavior flags, the
//! debug palette and the grid group-count cache. The host calls
//! [`SpacingDecoration::item_offsets`] once per visible item per layout pass.

use bitflags::bitflags;
use gutter_style::{DebugPalette, Insets, Spacing, SpacingStyle};

use crate::arrangement::{Arrangement, GridArrangement, Lane, ListItem, ListSurface, SpanSizes};
use crate::error::{GutterError, Result};
use crate::normalize::{ItemOffsetsParams, OffsetsRequest, normalize};
use crate::offsets::OffsetsCalculator;

bitflags! {
    /// Behavior switches of a [`SpacingDecoration`].
    ///
    /// ```
    /// use gutter::DecorationFlags;
    ///
    /// let flags = DecorationFlags::SPAN_SIZE_ALWAYS_ONE | DecorationFlags::DRAW_SPACING;
    /// assert!(!flags.contains(DecorationFlags::CACHE_GROUP_COUNT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DecorationFlags: u8 {
        /// Every grid item spans one cell, even when a span lookup is set.
        /// Skips the O(n) span walks.
        const SPAN_SIZE_ALWAYS_ONE = 0b0000_0001;
        /// Remember the grid group count for as long as the item count and
        /// span count stay the same. Call `invalidate()` after changing the
        /// span lookup.
        const CACHE_GROUP_COUNT    = 0b0000_0010;
        /// Paint applied spacing in `draw_spacing`.
        const DRAW_SPACING         = 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CachedGroupCount {
    item_count: usize,
    span_count: usize,
    group_count: usize,
}

/// Adds configured spacing around the items of one list surface.
#[derive(Debug, Clone)]
pub struct SpacingDecoration {
    calculator: OffsetsCalculator,
    flags: DecorationFlags,
    palette: DebugPalette,
    group_count: Option<CachedGroupCount>,
}

impl SpacingDecoration {
    pub fn new(spacing: Spacing) -> Self {
        Self {
            calculator: OffsetsCalculator::new(spacing),
            flags: DecorationFlags::empty(),
            palette: DebugPalette::default(),
            group_count: None,
        }
    }

    /// Build a decoration from a resolved spacing stylesheet.
    pub fn from_style(style: &SpacingStyle) -> Self {
        let mut flags = DecorationFlags::empty();
        flags.set(DecorationFlags::SPAN_SIZE_ALWAYS_ONE, style.span_size_always_one);
        flags.set(DecorationFlags::CACHE_GROUP_COUNT, style.cache_group_count);
        flags.set(DecorationFlags::DRAW_SPACING, style.debug);

        Self::new(style.spacing)
            .with_flags(flags)
            .with_palette(style.palette)
    }

    #[must_use]
    pub fn with_flags(mut self, flags: DecorationFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: DebugPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn spacing(&self) -> &Spacing {
        self.calculator.spacing()
    }

    /// Replace the spacing configuration; cached constants are dropped.
    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.calculator.set_spacing(spacing);
    }

    pub fn flags(&self) -> DecorationFlags {
        self.flags
    }

    pub fn set_flag(&mut self, flag: DecorationFlags, enabled: bool) {
        if flag.intersects(DecorationFlags::SPAN_SIZE_ALWAYS_ONE | DecorationFlags::CACHE_GROUP_COUNT)
        {
            self.group_count = None;
        }
        self.flags.set(flag, enabled);
    }

    pub fn palette(&self) -> &DebugPalette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: DebugPalette) {
        self.palette = palette;
    }

    /// Recompute spacing-derived constants on next use.
    pub fn invalidate_spacing(&mut self) {
        log::debug!("SpacingDecoration: spacing invalidated");
        self.calculator.invalidate();
    }

    /// Drop every cached value, including the grid group count.
    pub fn invalidate(&mut self) {
        self.invalidate_spacing();
        self.group_count = None;
    }

    /// Offsets for one item of `surface`.
    ///
    /// Items without an adapter position get [`Insets::ZERO`].
    pub fn item_offsets(&mut self, surface: &ListSurface, item: &ListItem) -> Result<Insets> {
        match self.canonical_position(surface, item)? {
            Some(request) => self.calculator.compute_offsets(&request),
            None => Ok(Insets::ZERO),
        }
    }

    /// Canonical grid coordinates of `item`, or `None` for a detached item.
    pub fn canonical_position(
        &mut self,
        surface: &ListSurface,
        item: &ListItem,
    ) -> Result<Option<OffsetsRequest>> {
        let Some(position) = item.position else {
            return Ok(None);
        };
        let params = self.item_params(surface, position, item.lane)?;
        normalize(&params).map(Some)
    }

    /// Host-oriented addressing of the item at `position`.
    pub fn item_params(
        &mut self,
        surface: &ListSurface,
        position: usize,
        lane: Option<Lane>,
    ) -> Result<ItemOffsetsParams> {
        let arrangement = surface
            .arrangement
            .as_ref()
            .ok_or(GutterError::MissingArrangement)?;

        match arrangement {
            Arrangement::Linear(direction) => Ok(ItemOffsetsParams {
                span_index: 0,
                group_index: position,
                span_size: 1,
                span_count: 1,
                group_count: surface.item_count,
                direction: *direction,
            }),
            Arrangement::Grid(grid) => {
                let span_count = grid.clamped_span_count();
                let spans = self.effective_spans(grid);
                Ok(ItemOffsetsParams {
                    span_index: spans.span_index(position, span_count),
                    group_index: spans.span_group_index(position, span_count),
                    span_size: spans.span_size(position, span_count),
                    span_count,
                    group_count: self.grid_group_count(surface.item_count, grid),
                    direction: grid.direction,
                })
            }
            Arrangement::Staggered(staggered) => {
                let lane = lane.ok_or_else(|| {
                    GutterError::UnsupportedArrangement(format!(
                        "staggered item {} has no lane",
                        position
                    ))
                })?;
                let span_count = staggered.span_count.max(1);
                let (span_index, span_size) = if lane.full_span {
                    (0, span_count)
                } else {
                    (lane.index.min(span_count - 1), 1)
                };
                // Lanes fill independently, so the whole surface is one group.
                Ok(ItemOffsetsParams {
                    span_index,
                    group_index: 0,
                    span_size,
                    span_count,
                    group_count: 1,
                    direction: staggered.direction,
                })
            }
            Arrangement::Custom { name } => Err(GutterError::UnsupportedArrangement(name.clone())),
        }
    }

    fn effective_spans<'a>(&self, grid: &'a GridArrangement) -> &'a SpanSizes {
        const UNIFORM: &SpanSizes = &SpanSizes::Uniform;
        if self.flags.contains(DecorationFlags::SPAN_SIZE_ALWAYS_ONE) {
            UNIFORM
        } else {
            &grid.spans
        }
    }

    /// Number of groups (rows of a vertical grid) on the scroll axis.
    fn grid_group_count(&mut self, item_count: usize, grid: &GridArrangement) -> usize {
        let span_count = grid.clamped_span_count();
        let caching = self.flags.contains(DecorationFlags::CACHE_GROUP_COUNT);

        if caching {
            if let Some(cached) = self.group_count {
                if cached.item_count == item_count && cached.span_count == span_count {
                    return cached.group_count;
                }
            }
        }

        let spans = self.effective_spans(grid);
        let group_count = if item_count == 0 {
            0
        } else if spans.is_uniform() {
            item_count.div_ceil(span_count)
        } else {
            spans.span_group_index(item_count - 1, span_count) + 1
        };
        log::trace!(
            "SpacingDecoration: {} items in {} spans -> {} groups",
            item_count,
            span_count,
            group_count
        );

        if caching {
            self.group_count = Some(CachedGroupCount {
                item_count,
                span_count,
                group_count,
            });
        }
        group_count
    }
}
