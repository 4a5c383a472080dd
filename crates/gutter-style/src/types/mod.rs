pub mod color;
pub mod geometry;
pub mod palette;
pub mod spacing;

pub use color::{ColorParseError, RgbaColor};
pub use geometry::Insets;
pub use palette::DebugPalette;
pub use spacing::{Spacing, SpacingBuilder};

/// Fully resolved decoration settings, as produced by a spacing stylesheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpacingStyle {
    pub spacing: Spacing,
    /// Every item spans exactly one cell; enables the uniform grid fast path.
    pub span_size_always_one: bool,
    /// Memoize grid group counts between layout passes.
    pub cache_group_count: bool,
    /// Paint applied spacing for visual inspection.
    pub debug: bool,
    pub palette: DebugPalette,
}
