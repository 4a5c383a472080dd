//! # gutter
//!
//! Computes the spacing to insert around each item of a scrolling list or
//! grid so that adjacent items are separated by a configured gap, the outer
//! items keep a configured edge margin, and every item gets optional padding.
//!
//! The pipeline for one item:
//!
//! 1. [`SpacingDecoration::item_params`] reads the host [`Arrangement`]
//!    (linear, grid or staggered) into host-oriented addressing.
//! 2. [`normalize`] turns that into canonical grid coordinates, undoing
//!    reversal and transposing horizontal layouts.
//! 3. [`OffsetsCalculator`] derives the four-sided [`Insets`].
//!
//! ```
//! use gutter::{Arrangement, Direction, Insets, ListItem, ListSurface, Spacing, SpacingDecoration};
//!
//! let spacing = Spacing::builder().horizontal(30).build()?;
//! let mut decoration = SpacingDecoration::new(spacing);
//! let surface = ListSurface::new(Arrangement::grid(3, Direction::vertical()), 3);
//!
//! let middle = decoration.item_offsets(&surface, &ListItem::at(1))?;
//! assert_eq!(middle, Insets::new(10, 0, 10, 0));
//! # Ok::<(), gutter::GutterError>(())
//! ```

pub mod arrangement;
pub mod canvas;
pub mod debug;
pub mod decoration;
pub mod error;
pub mod fraction;
mod log_init;
pub mod normalize;
pub mod offsets;
pub mod testing;
pub mod uniform;

pub use arrangement::{
    Arrangement, Direction, GridArrangement, Lane, ListItem, ListSurface, Orientation,
    SpanSizeLookup, SpanSizes, StaggeredArrangement,
};
pub use canvas::{Painter, Region};
pub use debug::Child;
pub use decoration::{DecorationFlags, SpacingDecoration};
pub use error::{GutterError, Result};
pub use fraction::Fraction;
pub use log_init::{init_logger, init_logger_with_level};
pub use normalize::{ItemOffsetsParams, OffsetsRequest, normalize};
pub use offsets::{CacheKey, DerivedConstants, OffsetsCalculator};
pub use uniform::UniformSpacing;

pub use gutter_style::{DebugPalette, Insets, RgbaColor, Spacing, SpacingStyle, StyleError};

// Re-export the log crate so hosts can use gutter::log::info!, etc.
pub use log;
