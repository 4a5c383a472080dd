//! Host-side description of how a list surface arranges its items.
//!
//! The host list widget reports one [`Arrangement`] per surface and a
//! [`ListItem`] per visible item. These carry only the addressing data the
//! position normalizer needs, so the calculator never sees widget types.

use std::fmt;
use std::rc::Rc;

use crate::normalize;

/// Primary scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Scroll axis plus the flags that flip item order along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Direction {
    pub orientation: Orientation,
    /// Items are laid out from the end of the scroll axis.
    pub reverse: bool,
    /// Right-to-left layout direction. Only affects horizontal scrolling.
    pub rtl: bool,
}

impl Direction {
    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::default()
        }
    }

    pub fn horizontal() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse = !self.reverse;
        self
    }

    #[must_use]
    pub fn right_to_left(mut self) -> Self {
        self.rtl = true;
        self
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// Whether the scroll axis is mirrored once `reverse` and `rtl` are combined.
    ///
    /// A right-to-left horizontal list flips its scroll axis; a reversed one
    /// flips it back.
    pub fn resolves_reversed(&self) -> bool {
        let rtl_flip = self.orientation == Orientation::Horizontal && self.rtl;
        self.reverse != rtl_flip
    }
}

/// Per-item span sizes of a grid.
///
/// Only [`span_size`](SpanSizeLookup::span_size) is required. The provided
/// index methods walk cumulative span sizes from position 0, wrapping to a new
/// group whenever an item does not fit in what is left of the current one.
/// Both are O(position).
pub trait SpanSizeLookup {
    fn span_size(&self, position: usize) -> usize;

    /// Cross-axis cell index the item at `position` starts at.
    fn span_index(&self, position: usize, span_count: usize) -> usize {
        let position_span = clamp_span(self.span_size(position), span_count);
        if position_span == span_count {
            return 0;
        }

        let mut span = 0;
        for i in 0..position {
            let size = clamp_span(self.span_size(i), span_count);
            span += size;
            if span == span_count {
                span = 0;
            } else if span > span_count {
                span = size;
            }
        }

        if span + position_span <= span_count {
            span
        } else {
            0
        }
    }

    /// Index of the group (row for vertical grids) containing `position`.
    fn span_group_index(&self, position: usize, span_count: usize) -> usize {
        let position_span = clamp_span(self.span_size(position), span_count);
        let mut span = 0;
        let mut group = 0;
        for i in 0..position {
            let size = clamp_span(self.span_size(i), span_count);
            span += size;
            if span == span_count {
                span = 0;
                group += 1;
            } else if span > span_count {
                span = size;
                group += 1;
            }
        }

        if span + position_span > span_count {
            group += 1;
        }
        group
    }
}

impl<F> SpanSizeLookup for F
where
    F: Fn(usize) -> usize,
{
    fn span_size(&self, position: usize) -> usize {
        self(position)
    }
}

pub(crate) fn clamp_span(size: usize, span_count: usize) -> usize {
    size.clamp(1, span_count.max(1))
}

/// Span sizes of a grid: every item one cell wide, or a host lookup.
#[derive(Clone, Default)]
pub enum SpanSizes {
    #[default]
    Uniform,
    Lookup(Rc<dyn SpanSizeLookup>),
}

impl SpanSizes {
    pub fn lookup(lookup: impl SpanSizeLookup + 'static) -> Self {
        SpanSizes::Lookup(Rc::new(lookup))
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, SpanSizes::Uniform)
    }

    /// Span size of `position`, clamped to `1..=span_count`.
    pub fn span_size(&self, position: usize, span_count: usize) -> usize {
        match self {
            SpanSizes::Uniform => 1,
            SpanSizes::Lookup(lookup) => clamp_span(lookup.span_size(position), span_count),
        }
    }

    pub fn span_index(&self, position: usize, span_count: usize) -> usize {
        match self {
            SpanSizes::Uniform => position % span_count.max(1),
            SpanSizes::Lookup(lookup) => lookup.span_index(position, span_count.max(1)),
        }
    }

    pub fn span_group_index(&self, position: usize, span_count: usize) -> usize {
        match self {
            SpanSizes::Uniform => position / span_count.max(1),
            SpanSizes::Lookup(lookup) => lookup.span_group_index(position, span_count.max(1)),
        }
    }

    /// Whether `position` is in group 0. O(1) for uniform spans.
    pub fn is_in_first_group(&self, position: usize, span_count: usize) -> bool {
        match self {
            SpanSizes::Uniform => position < span_count.max(1),
            SpanSizes::Lookup(lookup) => {
                normalize::is_in_first_group(position, lookup.as_ref(), span_count.max(1))
            }
        }
    }

    /// Whether `position` shares a group with the last of `item_count` items.
    /// O(1) for uniform spans.
    pub fn is_in_last_group(&self, position: usize, item_count: usize, span_count: usize) -> bool {
        match self {
            SpanSizes::Uniform => {
                position + 1 >= item_count
                    || position / span_count.max(1) == (item_count - 1) / span_count.max(1)
            }
            SpanSizes::Lookup(lookup) => normalize::is_in_last_group(
                position,
                item_count,
                lookup.as_ref(),
                span_count.max(1),
            ),
        }
    }
}

impl fmt::Debug for SpanSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanSizes::Uniform => f.write_str("Uniform"),
            SpanSizes::Lookup(_) => f.write_str("Lookup(..)"),
        }
    }
}

/// A row/column grid with optional multi-cell items.
#[derive(Debug, Clone)]
pub struct GridArrangement {
    pub direction: Direction,
    /// Cells across the cross axis. Values below 1 are treated as 1.
    pub span_count: usize,
    pub spans: SpanSizes,
}

impl GridArrangement {
    pub fn new(span_count: usize, direction: Direction) -> Self {
        Self {
            direction,
            span_count,
            spans: SpanSizes::Uniform,
        }
    }

    #[must_use]
    pub fn with_spans(mut self, spans: SpanSizes) -> Self {
        self.spans = spans;
        self
    }

    pub fn clamped_span_count(&self) -> usize {
        self.span_count.max(1)
    }
}

/// A staggered grid: items fill lanes independently, so the host reports
/// each item's lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredArrangement {
    pub direction: Direction,
    pub span_count: usize,
}

/// How a list surface arranges its items.
#[derive(Debug, Clone)]
pub enum Arrangement {
    /// A single row or column.
    Linear(Direction),
    Grid(GridArrangement),
    Staggered(StaggeredArrangement),
    /// A host layout with no canonical grid addressing.
    Custom { name: String },
}

impl Arrangement {
    pub fn linear(direction: Direction) -> Self {
        Arrangement::Linear(direction)
    }

    pub fn grid(span_count: usize, direction: Direction) -> Self {
        Arrangement::Grid(GridArrangement::new(span_count, direction))
    }

    pub fn staggered(span_count: usize, direction: Direction) -> Self {
        Arrangement::Staggered(StaggeredArrangement {
            direction,
            span_count,
        })
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Arrangement::Linear(direction) => Some(*direction),
            Arrangement::Grid(grid) => Some(grid.direction),
            Arrangement::Staggered(staggered) => Some(staggered.direction),
            Arrangement::Custom { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &str {
        match self {
            Arrangement::Linear(_) => "linear",
            Arrangement::Grid(_) => "grid",
            Arrangement::Staggered(_) => "staggered",
            Arrangement::Custom { name } => name,
        }
    }
}

/// Lane assignment of an item in a staggered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lane {
    pub index: usize,
    /// The item spans every lane.
    pub full_span: bool,
}

/// One item as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListItem {
    /// Adapter position; `None` for items being removed or not yet bound.
    pub position: Option<usize>,
    /// Required for staggered arrangements, ignored otherwise.
    pub lane: Option<Lane>,
}

impl ListItem {
    pub fn at(position: usize) -> Self {
        Self {
            position: Some(position),
            lane: None,
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_lane(mut self, index: usize, full_span: bool) -> Self {
        self.lane = Some(Lane { index, full_span });
        self
    }
}

/// The list surface a decoration is attached to.
#[derive(Debug, Clone)]
pub struct ListSurface {
    pub arrangement: Option<Arrangement>,
    pub item_count: usize,
}

impl ListSurface {
    pub fn new(arrangement: Arrangement, item_count: usize) -> Self {
        Self {
            arrangement: Some(arrangement),
            item_count,
        }
    }

    pub fn without_arrangement(item_count: usize) -> Self {
        Self {
            arrangement: None,
            item_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_then_pairs(position: usize) -> usize {
        // position 0 is a full-width header in a 2-column grid
        if position == 0 { 2 } else { 1 }
    }

    #[test]
    fn rtl_flips_only_horizontal() {
        assert!(Direction::horizontal().right_to_left().resolves_reversed());
        assert!(!Direction::horizontal().right_to_left().reversed().resolves_reversed());
        assert!(!Direction::vertical().right_to_left().resolves_reversed());
        assert!(Direction::vertical().reversed().resolves_reversed());
    }

    #[test]
    fn span_index_walks_cumulative_sizes() {
        let lookup = header_then_pairs;
        assert_eq!(lookup.span_index(0, 2), 0);
        assert_eq!(lookup.span_index(1, 2), 0);
        assert_eq!(lookup.span_index(2, 2), 1);
        assert_eq!(lookup.span_index(3, 2), 0);
    }

    #[test]
    fn group_index_wraps_oversized_items() {
        // sizes: 1, 2, 1 in a 2-column grid -> groups 0, 1, 2
        let lookup = |p: usize| if p == 1 { 2 } else { 1 };
        assert_eq!(lookup.span_group_index(0, 2), 0);
        assert_eq!(lookup.span_group_index(1, 2), 1);
        assert_eq!(lookup.span_group_index(2, 2), 2);
    }

    #[test]
    fn uniform_group_edges_match_lookup_walk() {
        let uniform = SpanSizes::Uniform;
        let walked = SpanSizes::lookup(|_: usize| 1);
        // 3 columns, 7 items: the last row holds only item 6
        for position in 0..7 {
            assert_eq!(
                uniform.is_in_first_group(position, 3),
                walked.is_in_first_group(position, 3),
                "first group at {}",
                position
            );
            assert_eq!(
                uniform.is_in_last_group(position, 7, 3),
                walked.is_in_last_group(position, 7, 3),
                "last group at {}",
                position
            );
        }
        assert!(uniform.is_in_last_group(6, 7, 3));
        assert!(!uniform.is_in_last_group(5, 7, 3));
    }

    #[test]
    fn uniform_spans_use_division() {
        let spans = SpanSizes::Uniform;
        assert_eq!(spans.span_index(7, 3), 1);
        assert_eq!(spans.span_group_index(7, 3), 2);
        assert_eq!(spans.span_size(7, 3), 1);
    }

    #[test]
    fn lookup_span_size_is_clamped() {
        let spans = SpanSizes::lookup(|_: usize| 9);
        assert_eq!(spans.span_size(0, 3), 3);
        let spans = SpanSizes::lookup(|_: usize| 0);
        assert_eq!(spans.span_size(0, 3), 1);
    }

    #[test]
    fn custom_arrangement_has_no_direction() {
        let custom = Arrangement::Custom {
            name: "carousel".into(),
        };
        assert_eq!(custom.direction(), None);
        assert_eq!(custom.kind_name(), "carousel");
    }
}
