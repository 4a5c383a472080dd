//! Grid and list item spacing.
//!
//! This package bundles the two workspace crates:
//!
//! - [`gutter`]: position normalization, the offset engine, the spacing
//!   decoration and its debug visualization
//! - [`style`]: spacing configuration types and the declaration stylesheet
//!
//! ```
//! use gutter_rs::prelude::*;
//!
//! let style = gutter_rs::style::parser::parse_style("gap: 0 30;")?;
//! let mut decoration = SpacingDecoration::from_style(&style);
//! let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical()), 3);
//!
//! let first = decoration.item_offsets(&surface, &ListItem::at(0))?;
//! assert_eq!(first, Insets::new(0, 0, 20, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use gutter::*;
pub use gutter_style as style;

/// The types needed to attach spacing to a list surface.
pub mod prelude {
    pub use gutter::{
        Arrangement, DecorationFlags, Direction, GutterError, Insets, ListItem, ListSurface,
        Spacing, SpacingDecoration, UniformSpacing,
    };
}
