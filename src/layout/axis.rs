//! Axis resolution and direction-aware edge lookup
//!
//! Flex layout works in main/cross coordinates. This module resolves the
//! container's writing direction and flex direction into a pair of concrete
//! axes, and provides table-driven accessors that map an axis to its leading
//! and trailing physical edges.
//!
//! Leading/trailing edge tables, indexed by the resolved flex direction:
//! Row → (Left, Right); RowReverse → (Right, Left); Column → (Top, Bottom);
//! ColumnReverse → (Bottom, Top). RTL flips Row and RowReverse.

use crate::style::dimension::{is_defined, Dimension};
use crate::style::edges::{Edge, EdgeValues};
use crate::style::types::{Direction, FlexDirection};
use crate::style::{FlexBoxStyle, FlexItemStyle};

/// Resolves `Inherit` to the root default (LTR)
pub(crate) fn resolve_direction(direction: Direction) -> Direction {
  match direction {
    Direction::Inherit => Direction::Ltr,
    other => other,
  }
}

/// Returns true for the horizontal main-axis directions
pub(crate) fn is_row(axis: FlexDirection) -> bool {
  matches!(axis, FlexDirection::Row | FlexDirection::RowReverse)
}

/// Returns true when the axis runs against the physical coordinate direction
pub(crate) fn is_reverse(axis: FlexDirection) -> bool {
  matches!(axis, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
}

/// Applies the writing direction to a flex direction
///
/// Under RTL the horizontal directions swap; column directions are
/// unaffected.
pub(crate) fn resolve_axis(axis: FlexDirection, direction: Direction) -> FlexDirection {
  if direction == Direction::Rtl {
    match axis {
      FlexDirection::Row => FlexDirection::RowReverse,
      FlexDirection::RowReverse => FlexDirection::Row,
      other => other,
    }
  } else {
    axis
  }
}

/// The axis perpendicular to `axis`, with the direction applied
pub(crate) fn cross_axis(axis: FlexDirection, direction: Direction) -> FlexDirection {
  if is_row(axis) {
    FlexDirection::Column
  } else {
    resolve_axis(FlexDirection::Row, direction)
  }
}

/// Physical edge at the start of an axis
pub(crate) fn leading_edge(axis: FlexDirection) -> Edge {
  match axis {
    FlexDirection::Row => Edge::Left,
    FlexDirection::RowReverse => Edge::Right,
    FlexDirection::Column => Edge::Top,
    FlexDirection::ColumnReverse => Edge::Bottom,
  }
}

/// Physical edge at the end of an axis
pub(crate) fn trailing_edge(axis: FlexDirection) -> Edge {
  match axis {
    FlexDirection::Row => Edge::Right,
    FlexDirection::RowReverse => Edge::Left,
    FlexDirection::Column => Edge::Bottom,
    FlexDirection::ColumnReverse => Edge::Top,
  }
}

/// Looks up the leading margin dimension for an axis
///
/// `Start` applies to horizontal axes only and beats the physical edge; this
/// is the direction-aware fallback the edge cascade leaves to callers.
pub(crate) fn leading_margin_dim(margin: &EdgeValues, axis: FlexDirection) -> Dimension {
  if is_row(axis) {
    let start = margin.get(Edge::Start);
    if !start.is_undefined() {
      return start;
    }
  }
  margin.computed(leading_edge(axis))
}

/// Looks up the trailing margin dimension for an axis
pub(crate) fn trailing_margin_dim(margin: &EdgeValues, axis: FlexDirection) -> Dimension {
  if is_row(axis) {
    let end = margin.get(Edge::End);
    if !end.is_undefined() {
      return end;
    }
  }
  margin.computed(trailing_edge(axis))
}

/// Resolved leading margin (auto treated as zero)
pub(crate) fn leading_margin(margin: &EdgeValues, axis: FlexDirection, reference: f32) -> f32 {
  let resolved = leading_margin_dim(margin, axis).resolve_margin(reference);
  if is_defined(resolved) {
    resolved
  } else {
    0.0
  }
}

/// Resolved trailing margin (auto treated as zero)
pub(crate) fn trailing_margin(margin: &EdgeValues, axis: FlexDirection, reference: f32) -> f32 {
  let resolved = trailing_margin_dim(margin, axis).resolve_margin(reference);
  if is_defined(resolved) {
    resolved
  } else {
    0.0
  }
}

/// Sum of both margins along an axis
pub(crate) fn margin_for_axis(margin: &EdgeValues, axis: FlexDirection, reference: f32) -> f32 {
  leading_margin(margin, axis, reference) + trailing_margin(margin, axis, reference)
}

/// Resolved leading inset of an edge set (padding or border)
///
/// Negative values are a contract violation and contribute zero.
pub(crate) fn leading_inset(edges: &EdgeValues, axis: FlexDirection, reference: f32) -> f32 {
  if is_row(axis) {
    let start = edges.get(Edge::Start);
    if !start.is_undefined() {
      let resolved = start.resolve(reference);
      if is_defined(resolved) {
        return resolved.max(0.0);
      }
    }
  }
  let resolved = edges.computed(leading_edge(axis)).resolve(reference);
  if is_defined(resolved) {
    resolved.max(0.0)
  } else {
    0.0
  }
}

/// Resolved trailing inset of an edge set
pub(crate) fn trailing_inset(edges: &EdgeValues, axis: FlexDirection, reference: f32) -> f32 {
  if is_row(axis) {
    let end = edges.get(Edge::End);
    if !end.is_undefined() {
      let resolved = end.resolve(reference);
      if is_defined(resolved) {
        return resolved.max(0.0);
      }
    }
  }
  let resolved = edges.computed(trailing_edge(axis)).resolve(reference);
  if is_defined(resolved) {
    resolved.max(0.0)
  } else {
    0.0
  }
}

/// Resolved leading position inset for an axis (NaN when unset)
///
/// Unlike padding and border, position insets may be negative.
pub(crate) fn leading_position(position: &EdgeValues, axis: FlexDirection, reference: f32) -> f32 {
  if is_row(axis) {
    let start = position.get(Edge::Start);
    if !start.is_undefined() {
      return start.resolve(reference);
    }
  }
  position.computed(leading_edge(axis)).resolve(reference)
}

/// Resolved trailing position inset for an axis (NaN when unset)
pub(crate) fn trailing_position(position: &EdgeValues, axis: FlexDirection, reference: f32) -> f32 {
  if is_row(axis) {
    let end = position.get(Edge::End);
    if !end.is_undefined() {
      return end.resolve(reference);
    }
  }
  position.computed(trailing_edge(axis)).resolve(reference)
}

/// Offset a relatively positioned item applies to its in-flow position
///
/// The leading inset wins; a trailing inset pushes the opposite way.
pub(crate) fn relative_offset(position: &EdgeValues, axis: FlexDirection, reference: f32) -> f32 {
  let leading = leading_position(position, axis, reference);
  if is_defined(leading) {
    return leading;
  }
  let trailing = trailing_position(position, axis, reference);
  if is_defined(trailing) {
    return -trailing;
  }
  0.0
}

/// The resolved axes of one layout call
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlexAxes {
  /// Resolved main axis (direction already applied)
  pub main: FlexDirection,
  /// Resolved cross axis
  pub cross: FlexDirection,
  /// Resolved writing direction
  pub direction: Direction,
}

impl FlexAxes {
  pub(crate) fn resolve(style: &FlexBoxStyle) -> Self {
    let direction = resolve_direction(style.direction);
    let main = resolve_axis(style.flex_direction, direction);
    Self {
      main,
      cross: cross_axis(main, direction),
      direction,
    }
  }

  /// Whether the main axis is horizontal
  pub(crate) fn is_main_row(&self) -> bool {
    is_row(self.main)
  }

  /// Picks the main-axis component of a (width, height) pair
  pub(crate) fn main_of(&self, width: f32, height: f32) -> f32 {
    if self.is_main_row() {
      width
    } else {
      height
    }
  }

  /// Picks the cross-axis component of a (width, height) pair
  pub(crate) fn cross_of(&self, width: f32, height: f32) -> f32 {
    if self.is_main_row() {
      height
    } else {
      width
    }
  }

  /// Reassembles (width, height) from main/cross components
  pub(crate) fn to_width_height(&self, main: f32, cross: f32) -> (f32, f32) {
    if self.is_main_row() {
      (main, cross)
    } else {
      (cross, main)
    }
  }
}

/// The item's style dimension along an axis
pub(crate) fn style_dimension<R>(style: &FlexItemStyle<R>, axis: FlexDirection) -> Dimension {
  if is_row(axis) {
    style.width
  } else {
    style.height
  }
}

/// The item's minimum style dimension along an axis
pub(crate) fn style_min_dimension<R>(style: &FlexItemStyle<R>, axis: FlexDirection) -> Dimension {
  if is_row(axis) {
    style.min_width
  } else {
    style.min_height
  }
}

/// The item's maximum style dimension along an axis
pub(crate) fn style_max_dimension<R>(style: &FlexItemStyle<R>, axis: FlexDirection) -> Dimension {
  if is_row(axis) {
    style.max_width
  } else {
    style.max_height
  }
}
