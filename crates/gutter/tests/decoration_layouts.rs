//! Tests for SpacingDecoration across linear, grid and staggered arrangements.

use gutter::{
    Arrangement, DecorationFlags, Direction, GridArrangement, GutterError, Insets, ListItem,
    ListSurface, SpacingDecoration, SpanSizes, UniformSpacing,
};
use gutter_style::Spacing;
use gutter_style::parser::parse_style;

fn edged(gap: i32, edge: i32) -> Spacing {
    Spacing::builder()
        .gap(gap)
        .edges(Insets::all(edge))
        .build()
        .unwrap()
}

fn offsets_of(decoration: &mut SpacingDecoration, surface: &ListSurface) -> Vec<Insets> {
    (0..surface.item_count)
        .map(|p| decoration.item_offsets(surface, &ListItem::at(p)).unwrap())
        .collect()
}

/// Item 0 spans both columns of a 2-column grid.
fn header_grid(direction: Direction) -> GridArrangement {
    GridArrangement::new(2, direction)
        .with_spans(SpanSizes::lookup(|p: usize| if p == 0 { 2 } else { 1 }))
}

// =============================================================================
// Linear
// =============================================================================

#[test]
fn test_vertical_list_spreads_gap_between_rows() {
    // 3 rows: per-row delta is (10 - 4 - 4) / 3
    let mut decoration = SpacingDecoration::new(edged(10, 4));
    let surface = ListSurface::new(Arrangement::linear(Direction::vertical()), 3);
    let offsets = offsets_of(&mut decoration, &surface);

    assert_eq!(offsets[0], Insets::new(4, 4, 4, 5));
    assert_eq!(offsets[1], Insets::new(4, 5, 4, 4));
    assert_eq!(offsets[2], Insets::new(4, 5, 4, 4));
}

#[test]
fn test_reversed_vertical_list_mirrors_rows() {
    let mut decoration = SpacingDecoration::new(edged(10, 4));
    let surface = ListSurface::new(Arrangement::linear(Direction::vertical().reversed()), 3);
    let offsets = offsets_of(&mut decoration, &surface);

    assert_eq!(offsets[0], Insets::new(4, 5, 4, 4), "first item sits in the last row");
    assert_eq!(offsets[2], Insets::new(4, 4, 4, 5), "last item sits in the first row");
}

#[test]
fn test_horizontal_list_reversal_symmetry() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(30).unwrap());
    let forward = ListSurface::new(Arrangement::linear(Direction::horizontal()), 3);
    let reversed = ListSurface::new(Arrangement::linear(Direction::horizontal().reversed()), 3);

    let forward = offsets_of(&mut decoration, &forward);
    let reversed = offsets_of(&mut decoration, &reversed);

    assert_eq!(forward[0], Insets::new(0, 0, 20, 0));
    for i in 0..3 {
        assert_eq!(reversed[i], forward[3 - i - 1], "reversed index {}", i);
        assert_eq!(reversed[i], forward[i].mirrored_horizontally(), "mirrored index {}", i);
    }
}

#[test]
fn test_rtl_horizontal_list_matches_reversed() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(30).unwrap());
    let rtl = ListSurface::new(Arrangement::linear(Direction::horizontal().right_to_left()), 3);
    let reversed = ListSurface::new(Arrangement::linear(Direction::horizontal().reversed()), 3);

    assert_eq!(
        offsets_of(&mut decoration, &rtl),
        offsets_of(&mut decoration, &reversed)
    );
}

#[test]
fn test_rtl_and_reverse_cancel_out() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(30).unwrap());
    let both = ListSurface::new(
        Arrangement::linear(Direction::horizontal().right_to_left().reversed()),
        3,
    );
    let plain = ListSurface::new(Arrangement::linear(Direction::horizontal()), 3);

    assert_eq!(
        offsets_of(&mut decoration, &both),
        offsets_of(&mut decoration, &plain)
    );
}

// =============================================================================
// Grid
// =============================================================================

#[test]
fn test_grid_with_full_width_header() {
    // rows: [header], [1, 2], [3]; vertical delta is 20 / 3
    let mut decoration = SpacingDecoration::new(Spacing::uniform(20).unwrap());
    let surface = ListSurface::new(Arrangement::Grid(header_grid(Direction::vertical())), 4);
    let offsets = offsets_of(&mut decoration, &surface);

    assert_eq!(offsets[0], Insets::new(0, 0, 0, 13), "header");
    assert_eq!(offsets[1], Insets::new(0, 7, 10, 6));
    assert_eq!(offsets[2], Insets::new(10, 7, 0, 6));
    assert_eq!(offsets[3], Insets::new(0, 13, 10, 0));
}

#[test]
fn test_horizontal_grid_transposes_spans_to_rows() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(10).unwrap());
    let surface = ListSurface::new(Arrangement::grid(2, Direction::horizontal()), 4);
    let offsets = offsets_of(&mut decoration, &surface);

    assert_eq!(offsets[0], Insets::new(0, 0, 5, 5));
    assert_eq!(offsets[1], Insets::new(0, 5, 5, 0));
    assert_eq!(offsets[3], Insets::new(5, 5, 0, 0));
}

#[test]
fn test_reversed_horizontal_grid_mirrors_columns() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(10).unwrap());
    let surface = ListSurface::new(Arrangement::grid(2, Direction::horizontal().reversed()), 4);

    let first = decoration.item_offsets(&surface, &ListItem::at(0)).unwrap();
    assert_eq!(first, Insets::new(5, 0, 0, 5));
}

#[test]
fn test_span_size_always_one_ignores_lookup() {
    let mut decoration = SpacingDecoration::new(Spacing::zero())
        .with_flags(DecorationFlags::SPAN_SIZE_ALWAYS_ONE);
    let surface = ListSurface::new(Arrangement::Grid(header_grid(Direction::vertical())), 4);

    let params = decoration.item_params(&surface, 1, None).unwrap();
    assert_eq!(params.span_index, 1);
    assert_eq!(params.group_index, 0);
    assert_eq!(params.span_size, 1);
    assert_eq!(params.group_count, 2);
}

#[test]
fn test_zero_span_count_is_treated_as_one() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(10).unwrap());
    let surface = ListSurface::new(Arrangement::grid(0, Direction::vertical()), 2);

    let params = decoration.item_params(&surface, 1, None).unwrap();
    assert_eq!((params.span_count, params.group_count), (1, 2));
}

#[test]
fn test_cached_group_count_survives_lookup_change_until_invalidated() {
    let mut decoration = SpacingDecoration::new(Spacing::zero())
        .with_flags(DecorationFlags::CACHE_GROUP_COUNT);

    let plain = ListSurface::new(Arrangement::grid(2, Direction::vertical()), 4);
    let with_header = ListSurface::new(Arrangement::Grid(header_grid(Direction::vertical())), 4);

    assert_eq!(decoration.item_params(&plain, 0, None).unwrap().group_count, 2);
    // same item count and span count: the cached value is reused
    assert_eq!(decoration.item_params(&with_header, 3, None).unwrap().group_count, 2);

    decoration.invalidate();
    assert_eq!(decoration.item_params(&with_header, 3, None).unwrap().group_count, 3);
}

#[test]
fn test_cached_group_count_tracks_item_count() {
    let mut decoration = SpacingDecoration::new(Spacing::zero())
        .with_flags(DecorationFlags::CACHE_GROUP_COUNT);

    let four = ListSurface::new(Arrangement::grid(2, Direction::vertical()), 4);
    let five = ListSurface::new(Arrangement::grid(2, Direction::vertical()), 5);

    assert_eq!(decoration.item_params(&four, 0, None).unwrap().group_count, 2);
    assert_eq!(decoration.item_params(&five, 0, None).unwrap().group_count, 3);
}

// =============================================================================
// Staggered
// =============================================================================

#[test]
fn test_staggered_lanes_become_columns() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(30).unwrap());
    let surface = ListSurface::new(Arrangement::staggered(3, Direction::vertical()), 9);

    let middle = decoration
        .item_offsets(&surface, &ListItem::at(4).with_lane(1, false))
        .unwrap();
    let full = decoration
        .item_offsets(&surface, &ListItem::at(5).with_lane(0, true))
        .unwrap();

    assert_eq!(middle, Insets::new(10, 0, 10, 0));
    assert_eq!(full, Insets::ZERO);
}

#[test]
fn test_staggered_item_without_lane_is_rejected() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(30).unwrap());
    let surface = ListSurface::new(Arrangement::staggered(3, Direction::vertical()), 9);

    assert!(matches!(
        decoration.item_offsets(&surface, &ListItem::at(4)),
        Err(GutterError::UnsupportedArrangement(_))
    ));
}

// =============================================================================
// Boundaries and errors
// =============================================================================

#[test]
fn test_detached_item_gets_zero_offsets() {
    let mut decoration = SpacingDecoration::new(edged(10, 4));
    let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical()), 6);
    assert_eq!(
        decoration.item_offsets(&surface, &ListItem::detached()).unwrap(),
        Insets::ZERO
    );
}

#[test]
fn test_single_item_gets_all_edges() {
    let mut decoration = SpacingDecoration::new(edged(10, 4));
    let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical()), 1);
    let offsets = decoration.item_offsets(&surface, &ListItem::at(0)).unwrap();

    assert_eq!(offsets.left, 4);
    assert_eq!(offsets.top, 4);
    assert_eq!(offsets.bottom, 4);
}

#[test]
fn test_missing_arrangement() {
    let mut decoration = SpacingDecoration::new(Spacing::zero());
    let surface = ListSurface::without_arrangement(3);
    assert!(matches!(
        decoration.item_offsets(&surface, &ListItem::at(0)),
        Err(GutterError::MissingArrangement)
    ));
}

#[test]
fn test_set_spacing_applies_to_next_pass() {
    let mut decoration = SpacingDecoration::new(Spacing::uniform(30).unwrap());
    let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical()), 3);
    let before = decoration.item_offsets(&surface, &ListItem::at(1)).unwrap();

    decoration.set_spacing(Spacing::uniform(60).unwrap());
    let after = decoration.item_offsets(&surface, &ListItem::at(1)).unwrap();

    assert_eq!(before, Insets::new(10, 0, 10, 0));
    assert_eq!(after, Insets::new(20, 0, 20, 0));
    assert_eq!(decoration.spacing().horizontal(), 60);
}

// =============================================================================
// Stylesheet configuration
// =============================================================================

#[test]
fn test_decoration_from_stylesheet() {
    let style = parse_style("gap: 0 30; span-size-always-one: yes; debug: true;").unwrap();
    let mut decoration = SpacingDecoration::from_style(&style);

    assert!(decoration.flags().contains(DecorationFlags::SPAN_SIZE_ALWAYS_ONE));
    assert!(decoration.flags().contains(DecorationFlags::DRAW_SPACING));
    assert!(!decoration.flags().contains(DecorationFlags::CACHE_GROUP_COUNT));

    let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical()), 3);
    assert_eq!(
        decoration.item_offsets(&surface, &ListItem::at(2)).unwrap(),
        Insets::new(20, 0, 0, 0)
    );
}

// =============================================================================
// Uniform spacing
// =============================================================================

#[test]
fn test_uniform_grid_inner_sides() {
    // 7 items in 3 columns: rows [0 1 2], [3 4 5], [6]
    let spacing = UniformSpacing::new(10).unwrap();
    let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical()), 7);
    let at = |p| spacing.item_offsets(&surface, &ListItem::at(p)).unwrap();

    assert_eq!(at(0), Insets::new(0, 0, 5, 5));
    assert_eq!(at(4), Insets::all(5));
    assert_eq!(at(6), Insets::new(0, 5, 5, 0));
}

#[test]
fn test_uniform_single_row_grid_has_no_vertical_padding() {
    let spacing = UniformSpacing::new(10).unwrap();
    let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical()), 2);

    let first = spacing.item_offsets(&surface, &ListItem::at(0)).unwrap();
    assert_eq!(first, Insets::new(0, 0, 5, 0));
}

#[test]
fn test_uniform_reversed_grid_swaps_top_and_bottom() {
    let spacing = UniformSpacing::new(10).unwrap();
    let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical().reversed()), 7);

    let first = spacing.item_offsets(&surface, &ListItem::at(0)).unwrap();
    assert_eq!(first, Insets::new(0, 5, 5, 0));
}

#[test]
fn test_uniform_spacing_rejects_staggered() {
    let spacing = UniformSpacing::new(10).unwrap();
    let surface = ListSurface::new(Arrangement::staggered(2, Direction::vertical()), 4);
    assert!(matches!(
        spacing.item_offsets(&surface, &ListItem::at(0).with_lane(0, false)),
        Err(GutterError::UnsupportedArrangement(_))
    ));
}
