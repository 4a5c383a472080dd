//! # gutter-style
//!
//! Spacing configuration for grid item decorations.
//!
//! This crate provides:
//!
//! - **Types**: [`Insets`], the validated [`Spacing`] configuration, the
//!   [`DebugPalette`] used to visualize spacing, and [`RgbaColor`]
//! - **Parsing**: a small declaration stylesheet that resolves into a
//!   [`SpacingStyle`](types::SpacingStyle)
//!
//! ## Quick Start
//!
//! ```rust
//! use gutter_style::{Insets, Spacing};
//!
//! let spacing = Spacing::builder()
//!     .horizontal(30)
//!     .vertical(12)
//!     .edges(Insets::all(8))
//!     .build()
//!     .expect("non-negative spacing");
//!
//! assert_eq!(spacing.edges().left, 8);
//! ```
//!
//! ## Stylesheet Properties
//!
//! - `gap: <both>` or `gap: <vertical> <horizontal>`
//! - `gap-horizontal`, `gap-vertical`
//! - `edges`, `item`: 1, 2 or 4 lengths in CSS order
//! - `span-size-always-one`, `cache-group-count`, `debug`: booleans
//! - `debug-edge-color`, `debug-item-color`, `debug-horizontal-color`,
//!   `debug-vertical-color`: colors
//!
//! Lengths are pixels by default; `dp` lengths are scaled by the density
//! passed to [`StyleSheet::resolve`](parser::StyleSheet::resolve).

pub mod error;
pub mod parser;
pub mod types;

pub use error::StyleError;
pub use types::{DebugPalette, Insets, RgbaColor, Spacing, SpacingBuilder, SpacingStyle};
