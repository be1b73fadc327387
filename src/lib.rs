//! A flexbox layout engine
//!
//! Given a container style, a vector of child item styles, and a set of
//! sizing bounds, [`calculate_layout`] computes a concrete rectangle for
//! every child following the CSS Flexible Box Layout algorithm. Content the
//! engine cannot size itself (text, images) is measured through synchronous
//! host callbacks on the item styles; the host's opaque measurement results
//! are carried through layout untouched and returned alongside the final
//! geometry.
//!
//! The engine is a pure function of its inputs plus callback return values:
//! it holds no state across calls, performs no I/O, and is safe to run
//! concurrently on disjoint inputs.
//!
//! # Example
//!
//! ```
//! use flexlayout::{calculate_layout, FlexBoxStyle, FlexItemStyle, JustifyContent};
//! use flexlayout::style::Dimension;
//!
//! let container = FlexBoxStyle {
//!     justify_content: JustifyContent::SpaceBetween,
//!     ..FlexBoxStyle::default()
//! };
//! let children: Vec<FlexItemStyle<()>> = (0..3)
//!     .map(|_| FlexItemStyle {
//!         width: Dimension::points(60.0),
//!         height: Dimension::points(40.0),
//!         ..FlexItemStyle::default()
//!     })
//!     .collect();
//!
//! let output =
//!     calculate_layout(&container, &children, 300.0, 300.0, 40.0, 40.0, f32::NAN).unwrap();
//! let lefts: Vec<f32> = output.children.iter().map(|c| c.left).collect();
//! assert_eq!(lefts, vec![0.0, 120.0, 240.0]);
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod snapshot;
pub mod style;

pub use error::{Error, MeasureError, Result};
pub use geometry::{EdgeOffsets, Point, Rect, Size};
pub use layout::{calculate_layout, AxisBounds, ChildLayout, LayoutOutput, MAX_CACHED_MEASUREMENTS};
pub use snapshot::{LayoutSnapshot, RectSnapshot};
pub use style::{
  AlignContent, AlignItems, AlignSelf, Direction, Display, FlexBoxStyle, FlexDirection,
  FlexItemStyle, FlexWrap, JustifyContent, MeasureConstraints, MeasureOutput, Overflow,
  PositionType,
};
