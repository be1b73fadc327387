//! Shared state for one layout call
//!
//! A [`LayoutContext`] bundles the resolved axes, the inner sizing bounds,
//! and the percentage references every pass needs. It is created by the
//! driver at entry and borrowed by the passes; nothing in it survives the
//! call.

use crate::layout::axis::{self, FlexAxes};
use crate::layout::bounds::AxisBounds;
use crate::style::dimension::is_defined;
use crate::style::item::MeasureConstraints;
use crate::style::{FlexBoxStyle, FlexItemStyle, FlexWrap};

pub(crate) struct LayoutContext<'a, R> {
  pub container: &'a FlexBoxStyle,
  pub children: &'a [FlexItemStyle<R>],
  pub axes: FlexAxes,
  /// Content-box bounds on the main axis
  pub inner_main: AxisBounds,
  /// Content-box bounds on the cross axis
  pub inner_cross: AxisBounds,
  /// Upper main-axis content extent, NaN when unbounded
  pub available_inner_main: f32,
  /// Upper cross-axis content extent, NaN when unbounded
  pub available_inner_cross: f32,
  /// Resolved padding+border at the main-start edge
  pub pb_main_leading: f32,
  /// Resolved padding+border at the main-end edge
  pub pb_main_trailing: f32,
  pub pb_cross_leading: f32,
  pub pb_cross_trailing: f32,
  /// Resolved border widths alone, for absolute inset positioning
  pub border_main_leading: f32,
  pub border_main_trailing: f32,
  pub border_cross_leading: f32,
  pub border_cross_trailing: f32,
  /// Child index eligible for the single-flex-child basis shortcut
  pub single_flex_child: Option<usize>,
}

impl<'a, R> LayoutContext<'a, R> {
  /// Percentage reference for child main-axis lengths
  pub(crate) fn main_reference(&self) -> f32 {
    self.available_inner_main
  }

  /// Percentage reference for child cross-axis lengths
  pub(crate) fn cross_reference(&self) -> f32 {
    self.available_inner_cross
  }

  /// Percentage reference for child margins and padding (always the inline
  /// axis, per CSS)
  pub(crate) fn width_reference(&self) -> f32 {
    if self.axes.is_main_row() {
      self.available_inner_main
    } else {
      self.available_inner_cross
    }
  }

  pub(crate) fn wrap(&self) -> FlexWrap {
    self.container.flex_wrap
  }

  pub(crate) fn is_single_line(&self) -> bool {
    self.container.flex_wrap == FlexWrap::NoWrap
  }

  /// Builds measurement constraints from main/cross ranges
  ///
  /// Undefined maxima become infinities (unbounded); undefined minima become
  /// zero. Owner sizes are the container's available content extents.
  pub(crate) fn measure_constraints(
    &self,
    main_min: f32,
    main_max: f32,
    cross_min: f32,
    cross_max: f32,
  ) -> MeasureConstraints {
    let lower = |v: f32| if is_defined(v) { v } else { 0.0 };
    let upper = |v: f32| if is_defined(v) { v } else { f32::INFINITY };
    let (min_width, min_height) = self.axes.to_width_height(lower(main_min), lower(cross_min));
    let (max_width, max_height) = self.axes.to_width_height(upper(main_max), upper(cross_max));
    let (owner_width, owner_height) = self
      .axes
      .to_width_height(self.available_inner_main, self.available_inner_cross);
    MeasureConstraints {
      min_width,
      max_width,
      min_height,
      max_height,
      owner_width,
      owner_height,
    }
  }

  /// Resolved main-axis margin of a child (auto as zero)
  pub(crate) fn item_main_margin(&self, style: &FlexItemStyle<R>) -> f32 {
    axis::margin_for_axis(&style.margin, self.axes.main, self.width_reference())
  }

  /// Resolved cross-axis margin of a child (auto as zero)
  pub(crate) fn item_cross_margin(&self, style: &FlexItemStyle<R>) -> f32 {
    axis::margin_for_axis(&style.margin, self.axes.cross, self.width_reference())
  }

  /// Child min/max constraints on the main axis (NaN when unresolvable)
  pub(crate) fn item_main_range(&self, style: &FlexItemStyle<R>) -> (f32, f32) {
    (
      axis::style_min_dimension(style, self.axes.main).resolve(self.main_reference()),
      axis::style_max_dimension(style, self.axes.main).resolve(self.main_reference()),
    )
  }

  /// Child min/max constraints on the cross axis (NaN when unresolvable)
  pub(crate) fn item_cross_range(&self, style: &FlexItemStyle<R>) -> (f32, f32) {
    (
      axis::style_min_dimension(style, self.axes.cross).resolve(self.cross_reference()),
      axis::style_max_dimension(style, self.axes.cross).resolve(self.cross_reference()),
    )
  }

  /// Whether a child has an auto margin at the main-start edge
  pub(crate) fn main_leading_margin_auto(&self, style: &FlexItemStyle<R>) -> bool {
    axis::leading_margin_dim(&style.margin, self.axes.main).is_auto()
  }

  pub(crate) fn main_trailing_margin_auto(&self, style: &FlexItemStyle<R>) -> bool {
    axis::trailing_margin_dim(&style.margin, self.axes.main).is_auto()
  }

  pub(crate) fn cross_leading_margin_auto(&self, style: &FlexItemStyle<R>) -> bool {
    axis::leading_margin_dim(&style.margin, self.axes.cross).is_auto()
  }

  pub(crate) fn cross_trailing_margin_auto(&self, style: &FlexItemStyle<R>) -> bool {
    axis::trailing_margin_dim(&style.margin, self.axes.cross).is_auto()
  }

  /// Main size derived from the aspect ratio and a known cross size
  pub(crate) fn main_from_aspect_ratio(&self, ratio: f32, cross: f32) -> f32 {
    if self.axes.is_main_row() {
      cross * ratio
    } else {
      cross / ratio
    }
  }

  /// Cross size derived from the aspect ratio and a known main size
  pub(crate) fn cross_from_aspect_ratio(&self, ratio: f32, main: f32) -> f32 {
    if self.axes.is_main_row() {
      main / ratio
    } else {
      main * ratio
    }
  }
}
