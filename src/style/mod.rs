//! Style system types
//!
//! This module contains the immutable style inputs to the layout algorithm:
//! dimension values with units, edge-indexed shorthand storage, the container
//! and item style records, and the host measurement callback types.

pub mod container;
pub mod dimension;
pub mod edges;
pub mod item;
pub mod types;

pub use container::FlexBoxStyle;
pub use dimension::{is_defined, Dimension, DimensionUnit, UNDEFINED};
pub use edges::{Edge, EdgeValues, EDGE_COUNT};
pub use item::{
  BaselineFn, FlexItemStyle, MeasureConstraints, MeasureFn, MeasureOutput, DEFAULT_FLEX_SHRINK,
};
pub use types::{
  AlignContent, AlignItems, AlignSelf, Direction, Display, FlexDirection, FlexWrap,
  JustifyContent, Overflow, PositionType,
};
