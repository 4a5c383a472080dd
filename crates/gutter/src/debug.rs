//! Debug visualization of applied spacing.
//!
//! Paints item padding, the gaps after and below each item, and the edge
//! strips along the visible region, each in its palette color. Only active
//! while [`DecorationFlags::DRAW_SPACING`] is set.

use gutter_style::Insets;

use crate::arrangement::{ListItem, ListSurface};
use crate::canvas::{Painter, Region};
use crate::decoration::{DecorationFlags, SpacingDecoration};
use crate::error::Result;

/// A laid-out item: its host addressing plus its bounds without offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Child {
    pub item: ListItem,
    pub bounds: Region,
}

impl Child {
    pub fn new(item: ListItem, bounds: Region) -> Self {
        Self { item, bounds }
    }
}

/// The children closest to each side of the visible region.
///
/// Ties go to the child listed first.
#[derive(Debug, Clone, Copy)]
struct ExtremeChildren<'a> {
    leftmost: &'a Child,
    topmost: &'a Child,
    rightmost: &'a Child,
    bottommost: &'a Child,
}

impl<'a> ExtremeChildren<'a> {
    fn find(children: &'a [Child]) -> Option<Self> {
        let first = children.first()?;
        let mut extremes = ExtremeChildren {
            leftmost: first,
            topmost: first,
            rightmost: first,
            bottommost: first,
        };

        for child in &children[1..] {
            let bounds = &child.bounds;
            if bounds.left() < extremes.leftmost.bounds.left() {
                extremes.leftmost = child;
            }
            if bounds.top() < extremes.topmost.bounds.top() {
                extremes.topmost = child;
            }
            if bounds.right() > extremes.rightmost.bounds.right() {
                extremes.rightmost = child;
            }
            if bounds.bottom() > extremes.bottommost.bounds.bottom() {
                extremes.bottommost = child;
            }
        }
        Some(extremes)
    }
}

impl SpacingDecoration {
    /// Paint the spacing applied to `children` inside `visible`.
    ///
    /// Does nothing unless [`DecorationFlags::DRAW_SPACING`] is set.
    pub fn draw_spacing(
        &mut self,
        painter: &mut dyn Painter,
        surface: &ListSurface,
        visible: Region,
        children: &[Child],
    ) -> Result<()> {
        if !self.flags().contains(DecorationFlags::DRAW_SPACING) {
            return Ok(());
        }

        self.draw_item_spacing(painter, children);
        self.draw_edge_spacing(painter, surface, visible, children)
    }

    fn draw_item_spacing(&self, painter: &mut dyn Painter, children: &[Child]) {
        let spacing = *self.spacing();
        let item = spacing.item();
        let palette = *self.palette();

        for child in children {
            let b = &child.bounds;
            let padded = Region::from_edges(
                b.left() - item.left,
                b.top() - item.top,
                b.right() + item.right,
                b.bottom() + item.bottom,
            );
            painter.fill_region(padded, palette.item);

            let gap_after = Region::from_edges(
                padded.right(),
                padded.top(),
                padded.right() + spacing.horizontal(),
                padded.bottom(),
            );
            painter.fill_region(gap_after, palette.horizontal);

            let gap_below = Region::from_edges(
                padded.left(),
                padded.bottom(),
                padded.right(),
                padded.bottom() + spacing.vertical(),
            );
            painter.fill_region(gap_below, palette.vertical);
        }
    }

    fn draw_edge_spacing(
        &mut self,
        painter: &mut dyn Painter,
        surface: &ListSurface,
        visible: Region,
        children: &[Child],
    ) -> Result<()> {
        let edges = self.spacing().edges();
        if edges.is_all_zeros() {
            return Ok(());
        }
        let Some(extremes) = ExtremeChildren::find(children) else {
            return Ok(());
        };

        let item = self.spacing().item();
        let color = self.palette().edge;

        for strip in [
            self.left_strip(surface, visible, extremes.leftmost, edges, item)?,
            self.top_strip(surface, visible, extremes.topmost, edges, item)?,
            self.right_strip(surface, visible, extremes.rightmost, edges, item)?,
            self.bottom_strip(surface, visible, extremes.bottommost, edges, item)?,
        ]
        .into_iter()
        .flatten()
        {
            painter.fill_region(strip, color);
        }
        Ok(())
    }

    fn left_strip(
        &mut self,
        surface: &ListSurface,
        visible: Region,
        child: &Child,
        edges: Insets,
        item: Insets,
    ) -> Result<Option<Region>> {
        let Some(request) = self.canonical_position(surface, &child.item)? else {
            return Ok(None);
        };
        if !request.is_first_col() {
            return Ok(None);
        }
        let inner = (child.bounds.left() - item.left).min(visible.left() + edges.left);
        Ok(Some(Region::from_edges(
            visible.left(),
            visible.top(),
            inner,
            visible.bottom(),
        )))
    }

    fn top_strip(
        &mut self,
        surface: &ListSurface,
        visible: Region,
        child: &Child,
        edges: Insets,
        item: Insets,
    ) -> Result<Option<Region>> {
        let Some(request) = self.canonical_position(surface, &child.item)? else {
            return Ok(None);
        };
        if !request.is_first_row() {
            return Ok(None);
        }
        let inner = (child.bounds.top() - item.top).min(visible.top() + edges.top);
        Ok(Some(Region::from_edges(
            visible.left(),
            visible.top(),
            visible.right(),
            inner,
        )))
    }

    fn right_strip(
        &mut self,
        surface: &ListSurface,
        visible: Region,
        child: &Child,
        edges: Insets,
        item: Insets,
    ) -> Result<Option<Region>> {
        let Some(request) = self.canonical_position(surface, &child.item)? else {
            return Ok(None);
        };
        if !request.is_last_col() {
            return Ok(None);
        }
        let inner = (child.bounds.right() + item.right).max(visible.right() - edges.right);
        Ok(Some(Region::from_edges(
            inner,
            visible.top(),
            visible.right(),
            visible.bottom(),
        )))
    }

    fn bottom_strip(
        &mut self,
        surface: &ListSurface,
        visible: Region,
        child: &Child,
        edges: Insets,
        item: Insets,
    ) -> Result<Option<Region>> {
        let Some(request) = self.canonical_position(surface, &child.item)? else {
            return Ok(None);
        };
        if !request.is_last_row() {
            return Ok(None);
        }
        let inner = (child.bounds.bottom() + item.bottom).max(visible.bottom() - edges.bottom);
        Ok(Some(Region::from_edges(
            visible.left(),
            inner,
            visible.right(),
            visible.bottom(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::{Arrangement, Direction};
    use gutter_style::{RgbaColor, Spacing};

    #[derive(Default)]
    struct Recorder {
        fills: Vec<(Region, RgbaColor)>,
    }

    impl Painter for Recorder {
        fn fill_region(&mut self, region: Region, color: RgbaColor) {
            self.fills.push((region, color));
        }
    }

    fn edged(gap: i32) -> Spacing {
        Spacing::builder()
            .gap(gap)
            .edges(Insets::all(gap))
            .build()
            .unwrap()
    }

    fn one_item_list() -> (ListSurface, Vec<Child>) {
        let surface = ListSurface::new(Arrangement::linear(Direction::vertical()), 1);
        let children = vec![Child::new(ListItem::at(0), Region::new(2, 2, 6, 3))];
        (surface, children)
    }

    #[test]
    fn nothing_is_drawn_without_flag() {
        let (surface, children) = one_item_list();
        let mut decoration = SpacingDecoration::new(Spacing::uniform(2).unwrap());
        let mut recorder = Recorder::default();
        decoration
            .draw_spacing(&mut recorder, &surface, Region::new(0, 0, 10, 7), &children)
            .unwrap();
        assert!(recorder.fills.is_empty());
    }

    #[test]
    fn no_edge_strips_without_children() {
        let (surface, _) = one_item_list();
        let mut decoration = SpacingDecoration::new(edged(2))
            .with_flags(DecorationFlags::DRAW_SPACING);
        let mut recorder = Recorder::default();
        decoration
            .draw_spacing(&mut recorder, &surface, Region::new(0, 0, 10, 7), &[])
            .unwrap();
        assert!(recorder.fills.is_empty());
    }

    #[test]
    fn single_item_gets_all_four_edge_strips() {
        let (surface, children) = one_item_list();
        let mut decoration = SpacingDecoration::new(edged(2))
            .with_flags(DecorationFlags::DRAW_SPACING);
        let edge = decoration.palette().edge;
        let mut recorder = Recorder::default();
        decoration
            .draw_spacing(&mut recorder, &surface, Region::new(0, 0, 10, 7), &children)
            .unwrap();

        let strips: Vec<Region> = recorder
            .fills
            .iter()
            .filter(|(_, color)| *color == edge)
            .map(|(region, _)| *region)
            .collect();
        assert_eq!(
            strips,
            vec![
                Region::new(0, 0, 2, 7),
                Region::new(0, 0, 10, 2),
                Region::new(8, 0, 2, 7),
                Region::new(0, 5, 10, 2),
            ]
        );
    }

    #[test]
    fn extremes_prefer_first_on_ties() {
        let a = Child::new(ListItem::at(0), Region::new(0, 0, 4, 4));
        let b = Child::new(ListItem::at(1), Region::new(0, 0, 4, 4));
        let children = [a, b];
        let extremes = ExtremeChildren::find(&children).unwrap();
        assert_eq!(extremes.leftmost.item.position, Some(0));
        assert_eq!(extremes.bottommost.item.position, Some(0));
    }
}
