//! Item style record and the host measurement contract
//!
//! A [`FlexItemStyle`] describes one child of a flex container. Leaf content
//! the engine cannot size itself (text, images) is measured through the
//! item's [`MeasureFn`] callback; the callback's opaque result type `R` is
//! carried through layout untouched and handed back to the host in the
//! output, in child order.

use std::fmt;

use crate::error::MeasureError;
use crate::style::dimension::Dimension;
use crate::style::edges::EdgeValues;
use crate::style::types::{AlignSelf, Display, PositionType};

/// Constraints passed to a measurement callback
///
/// Minimum and maximum extents per axis, plus the owner (container) sizes
/// for percentage resolution inside the host. Unbounded maxima travel as
/// `f32::INFINITY`; undefined owner sizes as NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureConstraints {
  pub min_width: f32,
  pub max_width: f32,
  pub min_height: f32,
  pub max_height: f32,
  pub owner_width: f32,
  pub owner_height: f32,
}

/// Result of a measurement callback
///
/// Width and height must be finite and within the given bounds; values
/// outside the bounds are clamped before use. The baseline may be NaN when
/// the content has none. `result` is a host-owned handle (for example a
/// laid-out text buffer) that the engine stores and returns without
/// interpreting.
#[derive(Debug)]
pub struct MeasureOutput<R> {
  pub width: f32,
  pub height: f32,
  pub baseline: f32,
  pub result: R,
}

impl<R> MeasureOutput<R> {
  /// Creates a measure output with no baseline
  pub fn new(width: f32, height: f32, result: R) -> Self {
    Self {
      width,
      height,
      baseline: f32::NAN,
      result,
    }
  }

  /// Creates a measure output with a baseline
  pub fn with_baseline(width: f32, height: f32, baseline: f32, result: R) -> Self {
    Self {
      width,
      height,
      baseline,
      result,
    }
  }
}

/// Measurement callback supplied by the host
///
/// Invoked synchronously, possibly several times per layout with different
/// constraints; results for repeated constraints are served from a per-item
/// cache instead. A returned error aborts the layout call.
pub type MeasureFn<R> =
  Box<dyn Fn(&MeasureConstraints) -> std::result::Result<MeasureOutput<R>, MeasureError>>;

/// Baseline callback supplied by the host
///
/// Receives the item's final width and height; returns the baseline offset
/// from the item's top edge. Called only for items that opt into baseline
/// alignment with a custom baseline.
pub type BaselineFn = Box<dyn Fn(f32, f32) -> f32>;

/// Style of a single flex item
///
/// Unset numeric properties are NaN; the `resolved_*` accessors fold the
/// `flex` shorthand and the per-property defaults into usable values.
pub struct FlexItemStyle<R> {
  /// The `flex` shorthand; a positive value implies grow = flex,
  /// shrink = 1, basis = 0 unless overridden by the specific properties
  pub flex: f32,
  /// Explicit grow factor; NaN when unset
  pub flex_grow: f32,
  /// Explicit shrink factor; NaN when unset
  pub flex_shrink: f32,
  /// Initial main size before free space distribution
  pub flex_basis: Dimension,
  pub width: Dimension,
  pub height: Dimension,
  pub min_width: Dimension,
  pub min_height: Dimension,
  pub max_width: Dimension,
  pub max_height: Dimension,
  /// Margin per edge; `auto` margins absorb free space during alignment
  pub margin: EdgeValues,
  /// Inset offsets for absolutely positioned items
  pub position: EdgeValues,
  pub align_self: AlignSelf,
  pub position_type: PositionType,
  /// Width / height ratio; NaN when unset, must be positive otherwise
  pub aspect_ratio: f32,
  pub display: Display,
  /// Opt into the text pixel-coverage rounding policy
  pub enable_text_rounding: bool,
  /// Content measurement callback for intrinsic sizing
  pub measure: Option<MeasureFn<R>>,
  /// Custom baseline callback
  pub baseline: Option<BaselineFn>,
}

/// Default flex shrink factor applied when neither `flex_shrink` nor the
/// `flex` shorthand specifies one.
pub const DEFAULT_FLEX_SHRINK: f32 = 1.0;

impl<R> FlexItemStyle<R> {
  /// The effective grow factor
  ///
  /// Explicit `flex_grow` wins; otherwise a positive `flex` shorthand
  /// supplies it; otherwise 0.
  pub fn resolved_flex_grow(&self) -> f32 {
    if !self.flex_grow.is_nan() {
      return self.flex_grow;
    }
    if !self.flex.is_nan() && self.flex > 0.0 {
      return self.flex;
    }
    0.0
  }

  /// The effective shrink factor
  ///
  /// Explicit `flex_shrink` wins; a negative `flex` shorthand supplies its
  /// magnitude; otherwise [`DEFAULT_FLEX_SHRINK`].
  pub fn resolved_flex_shrink(&self) -> f32 {
    if !self.flex_shrink.is_nan() {
      return self.flex_shrink;
    }
    if !self.flex.is_nan() && self.flex < 0.0 {
      return -self.flex;
    }
    DEFAULT_FLEX_SHRINK
  }

  /// The effective flex basis
  ///
  /// An explicit basis wins; otherwise a positive `flex` shorthand forces a
  /// zero basis; otherwise `auto` falls through to the main-axis style
  /// dimension during the flex-basis pass.
  pub fn resolved_flex_basis(&self) -> Dimension {
    if self.flex_basis.is_definite() {
      return self.flex_basis;
    }
    if !self.flex.is_nan() && self.flex > 0.0 {
      return Dimension::points(0.0);
    }
    self.flex_basis
  }

  /// Returns true if this item participates in flex layout at all
  pub fn is_in_flow(&self) -> bool {
    self.display == Display::Flex && self.position_type == PositionType::Relative
  }

  /// The aspect ratio, validated
  ///
  /// Non-positive ratios are a contract violation and degrade to unset.
  pub fn definite_aspect_ratio(&self) -> Option<f32> {
    if self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0 {
      Some(self.aspect_ratio)
    } else {
      None
    }
  }
}

impl<R> Default for FlexItemStyle<R> {
  fn default() -> Self {
    Self {
      flex: f32::NAN,
      flex_grow: f32::NAN,
      flex_shrink: f32::NAN,
      flex_basis: Dimension::AUTO,
      width: Dimension::UNDEFINED,
      height: Dimension::UNDEFINED,
      min_width: Dimension::UNDEFINED,
      min_height: Dimension::UNDEFINED,
      max_width: Dimension::UNDEFINED,
      max_height: Dimension::UNDEFINED,
      margin: EdgeValues::undefined(),
      position: EdgeValues::undefined(),
      align_self: AlignSelf::Auto,
      position_type: PositionType::Relative,
      aspect_ratio: f32::NAN,
      display: Display::Flex,
      enable_text_rounding: false,
      measure: None,
      baseline: None,
    }
  }
}

impl<R> fmt::Debug for FlexItemStyle<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FlexItemStyle")
      .field("flex", &self.flex)
      .field("flex_grow", &self.flex_grow)
      .field("flex_shrink", &self.flex_shrink)
      .field("flex_basis", &self.flex_basis)
      .field("width", &self.width)
      .field("height", &self.height)
      .field("min_width", &self.min_width)
      .field("min_height", &self.min_height)
      .field("max_width", &self.max_width)
      .field("max_height", &self.max_height)
      .field("margin", &self.margin)
      .field("position", &self.position)
      .field("align_self", &self.align_self)
      .field("position_type", &self.position_type)
      .field("aspect_ratio", &self.aspect_ratio)
      .field("display", &self.display)
      .field("enable_text_rounding", &self.enable_text_rounding)
      .field("has_measure_function", &self.measure.is_some())
      .field("has_baseline_function", &self.baseline.is_some())
      .finish()
  }
}
