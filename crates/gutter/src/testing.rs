//! Test utilities for snapshot testing spacing.
//!
//! [`TestCanvas`] is a [`Painter`] backed by a character grid. Every fill is
//! recorded and rasterized, with each palette color mapped to one symbol, so
//! the debug visualization can be compared as plain text:
//!
//! ```
//! use gutter::testing::TestCanvas;
//! use gutter::{DebugPalette, Painter, Region};
//!
//! let palette = DebugPalette::default();
//! let mut canvas = TestCanvas::new(4, 2);
//! canvas.fill_region(Region::new(1, 0, 2, 1), palette.edge);
//! assert_eq!(canvas.to_text(), ".EE.\n....");
//! ```
//!
//! Symbols for the default palette: `E` edge, `i` item padding, `h`
//! horizontal gap, `v` vertical gap, `#` any other color, `.` unpainted.

use gutter_style::{DebugPalette, RgbaColor};

use crate::canvas::{Painter, Region};

const BLANK: char = '.';
const UNKNOWN: char = '#';

/// A character-grid painter for tests.
pub struct TestCanvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
    legend: Vec<(RgbaColor, char)>,
    fills: Vec<(Region, RgbaColor)>,
}

impl TestCanvas {
    /// Create a blank canvas that understands the default palette.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_palette(width, height, &DebugPalette::default())
    }

    pub fn with_palette(width: usize, height: usize, palette: &DebugPalette) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![BLANK; width]; height],
            legend: vec![
                (palette.edge, 'E'),
                (palette.item, 'i'),
                (palette.horizontal, 'h'),
                (palette.vertical, 'v'),
            ],
            fills: Vec::new(),
        }
    }

    /// Every fill received so far, in order.
    pub fn fills(&self) -> &[(Region, RgbaColor)] {
        &self.fills
    }

    /// Regions filled with `color`, in order.
    pub fn regions_of(&self, color: RgbaColor) -> Vec<Region> {
        self.fills
            .iter()
            .filter(|(_, c)| *c == color)
            .map(|(region, _)| *region)
            .collect()
    }

    /// Rows joined by newlines.
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Get a specific row as text.
    pub fn row(&self, y: usize) -> Option<String> {
        self.cells.get(y).map(|row| row.iter().collect())
    }

    pub fn symbol_at(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    fn symbol_for(&self, color: RgbaColor) -> char {
        self.legend
            .iter()
            .find(|(c, _)| *c == color)
            .map(|(_, symbol)| *symbol)
            .unwrap_or(UNKNOWN)
    }
}

impl Painter for TestCanvas {
    fn fill_region(&mut self, region: Region, color: RgbaColor) {
        self.fills.push((region, color));

        let bounds = Region::new(0, 0, self.width as i32, self.height as i32);
        let clipped = region.intersection(&bounds);
        if clipped.is_empty() {
            return;
        }

        let symbol = self.symbol_for(color);
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                self.cells[y as usize][x as usize] = symbol;
            }
        }
    }
}
