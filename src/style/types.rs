//! Style type definitions
//!
//! This module contains the enum types used in box and item styles. These
//! types represent CSS flexbox property values that can be applied to a
//! container or its children.

/// Text/layout direction
///
/// CSS: `direction`
/// Reference: CSS Writing Modes Level 3
///
/// `Inherit` on the root container resolves to `Ltr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Inherit,
  Ltr,
  Rtl,
}

impl Default for Direction {
  fn default() -> Self {
    Direction::Inherit
  }
}

/// Main axis direction for flex layout
///
/// CSS: `flex-direction`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
  Row,
  RowReverse,
  Column,
  ColumnReverse,
}

impl Default for FlexDirection {
  fn default() -> Self {
    FlexDirection::Row
  }
}

/// Flex item wrapping behavior
///
/// CSS: `flex-wrap`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexWrap {
  NoWrap,
  Wrap,
  WrapReverse,
}

impl Default for FlexWrap {
  fn default() -> Self {
    FlexWrap::NoWrap
  }
}

/// Main axis space distribution
///
/// CSS: `justify-content`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JustifyContent {
  FlexStart,
  FlexEnd,
  Center,
  SpaceBetween,
  SpaceAround,
  SpaceEvenly,
}

impl Default for JustifyContent {
  fn default() -> Self {
    JustifyContent::FlexStart
  }
}

/// Cross axis alignment for flex items
///
/// CSS: `align-items`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignItems {
  FlexStart,
  FlexEnd,
  Center,
  Baseline,
  Stretch,
}

impl Default for AlignItems {
  fn default() -> Self {
    AlignItems::Stretch
  }
}

/// Per-item override of the container's `align-items`
///
/// CSS: `align-self`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignSelf {
  Auto,
  FlexStart,
  FlexEnd,
  Center,
  Baseline,
  Stretch,
}

impl Default for AlignSelf {
  fn default() -> Self {
    AlignSelf::Auto
  }
}

impl AlignSelf {
  /// Resolves `Auto` to the container's `align-items` value.
  pub fn resolve(self, container: AlignItems) -> AlignItems {
    match self {
      AlignSelf::Auto => container,
      AlignSelf::FlexStart => AlignItems::FlexStart,
      AlignSelf::FlexEnd => AlignItems::FlexEnd,
      AlignSelf::Center => AlignItems::Center,
      AlignSelf::Baseline => AlignItems::Baseline,
      AlignSelf::Stretch => AlignItems::Stretch,
    }
  }
}

/// Multi-line cross axis alignment
///
/// CSS: `align-content`
/// Reference: CSS Flexible Box Layout Module Level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignContent {
  FlexStart,
  FlexEnd,
  Center,
  Stretch,
  SpaceBetween,
  SpaceAround,
  SpaceEvenly,
}

impl Default for AlignContent {
  fn default() -> Self {
    AlignContent::FlexStart
  }
}

/// Positioning scheme for a flex item
///
/// CSS: `position`
/// Reference: CSS Positioned Layout Module Level 3
///
/// `Absolute` items are removed from flex line sizing and laid out against
/// the container once in-flow layout completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionType {
  Relative,
  Absolute,
}

impl Default for PositionType {
  fn default() -> Self {
    PositionType::Relative
  }
}

/// Whether an item generates a box at all
///
/// CSS: `display`
///
/// `None` items contribute nothing to line sizing and receive a zero rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
  Flex,
  None,
}

impl Default for Display {
  fn default() -> Self {
    Display::Flex
  }
}

/// Overflow behavior for content that exceeds container bounds
///
/// CSS: `overflow`
/// Reference: CSS Overflow Module Level 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
  Visible,
  Hidden,
  Scroll,
}

impl Default for Overflow {
  fn default() -> Self {
    Overflow::Visible
  }
}
