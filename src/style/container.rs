//! Container style record
//!
//! A [`FlexBoxStyle`] is the immutable description of a flex container: axis
//! configuration, distribution and alignment policies, padding and border,
//! and the pixel grid scale used by the final rounding pass.

use crate::style::edges::EdgeValues;
use crate::style::types::{
  AlignContent, AlignItems, Direction, FlexDirection, FlexWrap, JustifyContent, Overflow,
};

/// Style of a flex container
///
/// All fields are plain data; construct one with struct update syntax over
/// [`FlexBoxStyle::default`].
///
/// # Examples
///
/// ```
/// use flexlayout::style::{FlexBoxStyle, FlexDirection, JustifyContent};
///
/// let style = FlexBoxStyle {
///     flex_direction: FlexDirection::Column,
///     justify_content: JustifyContent::Center,
///     ..FlexBoxStyle::default()
/// };
/// assert_eq!(style.point_scale_factor, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlexBoxStyle {
  /// Writing direction; `Inherit` resolves to LTR at the root
  pub direction: Direction,
  /// Main axis selection
  pub flex_direction: FlexDirection,
  /// Main axis distribution of free space
  pub justify_content: JustifyContent,
  /// Cross axis distribution of flex lines
  pub align_content: AlignContent,
  /// Default cross axis alignment of items
  pub align_items: AlignItems,
  /// Line wrapping policy
  pub flex_wrap: FlexWrap,
  /// Behavior when content exceeds the container
  pub overflow: Overflow,
  /// Padding per edge
  pub padding: EdgeValues,
  /// Border widths per edge
  pub border: EdgeValues,
  /// Logical-to-physical pixel ratio used by grid rounding; must be positive
  pub point_scale_factor: f32,
}

impl Default for FlexBoxStyle {
  fn default() -> Self {
    Self {
      direction: Direction::default(),
      flex_direction: FlexDirection::default(),
      justify_content: JustifyContent::default(),
      align_content: AlignContent::default(),
      align_items: AlignItems::default(),
      flex_wrap: FlexWrap::default(),
      overflow: Overflow::default(),
      padding: EdgeValues::undefined(),
      border: EdgeValues::undefined(),
      point_scale_factor: 1.0,
    }
  }
}
