//! Absolute child layout
//!
//! Absolutely positioned items do not participate in flex line sizing; they
//! are sized and placed against the finished container. Sizes come from
//! definite style dimensions, then from opposing insets, then from the
//! aspect ratio, and finally from measurement. Positions come from the
//! leading inset, then the trailing inset, then the container's
//! justify/align policies.

use log::trace;

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::axis::{self, is_reverse, style_dimension, style_max_dimension, style_min_dimension};
use crate::layout::bounds::clamp_to_range;
use crate::layout::context::LayoutContext;
use crate::layout::item::{FlexItem, ResolutionPhase};
use crate::style::dimension::is_defined;
use crate::style::types::{AlignItems, FlexDirection, JustifyContent};
use crate::style::FlexItemStyle;

/// Lays out every absolutely positioned child
///
/// `inner_main`/`inner_cross` are the container's final content extents;
/// `outer_main`/`outer_cross` its border-box extents.
pub(crate) fn layout_absolute_children<R>(
  ctx: &LayoutContext<'_, R>,
  absolute: &[usize],
  items: &mut [FlexItem<R>],
  inner_main: f32,
  inner_cross: f32,
  outer_main: f32,
  outer_cross: f32,
) -> Result<()> {
  for &slot in absolute {
    let item = &mut items[slot];
    let style = &ctx.children[item.index];

    let main = resolve_axis_size(ctx, style, ctx.axes.main, inner_main);
    let cross = resolve_axis_size(ctx, style, ctx.axes.cross, inner_cross);

    // Derive the missing axis from the aspect ratio when possible.
    let (mut main, mut cross) = match (style.definite_aspect_ratio(), main, cross) {
      (Some(ratio), Some(main), None) => (Some(main), Some(ctx.cross_from_aspect_ratio(ratio, main))),
      (Some(ratio), None, Some(cross)) => {
        (Some(ctx.main_from_aspect_ratio(ratio, cross)), Some(cross))
      }
      (_, main, cross) => (main, cross),
    };

    // Measure for any axis still unknown, and to produce the host result
    // when the item carries a measurement callback.
    if main.is_none() || cross.is_none() || style.measure.is_some() {
      let main_margin = ctx.item_main_margin(style);
      let cross_margin = ctx.item_cross_margin(style);
      let (main_min, main_max) = match main {
        Some(size) => (size, size),
        None => (0.0, (inner_main - main_margin).max(0.0)),
      };
      let (cross_min, cross_max) = match cross {
        Some(size) => (size, size),
        None => (0.0, (inner_cross - cross_margin).max(0.0)),
      };
      let constraints = ctx.measure_constraints(main_min, main_max, cross_min, cross_max);
      let measured = item.measure(style, &constraints)?;
      let measured_main = ctx.axes.main_of(measured.width, measured.height);
      let measured_cross = ctx.axes.cross_of(measured.width, measured.height);
      main = Some(main.unwrap_or(measured_main));
      cross = Some(cross.unwrap_or(measured_cross));
      item.baseline = measured.baseline;
    }

    let main_size = clamp_axis(style, ctx.axes.main, main.unwrap_or(0.0), inner_main);
    let cross_size = clamp_axis(style, ctx.axes.cross, cross.unwrap_or(0.0), inner_cross);
    item.target_main_size = main_size;
    item.cross_size = cross_size;

    let main_logical = position_on_axis(
      ctx,
      style,
      MainOrCross::Main,
      main_size,
      inner_main,
      outer_main,
    );
    let cross_logical = position_on_axis(
      ctx,
      style,
      MainOrCross::Cross,
      cross_size,
      inner_cross,
      outer_cross,
    );

    let main_physical = if is_reverse(ctx.axes.main) {
      outer_main - main_logical - main_size
    } else {
      main_logical
    };
    let cross_physical = if is_reverse(ctx.axes.cross) {
      outer_cross - cross_logical - cross_size
    } else {
      cross_logical
    };

    let (x, y) = ctx.axes.to_width_height(main_physical, cross_physical);
    let (width, height) = ctx.axes.to_width_height(main_size, cross_size);
    item.rect = Rect::from_xywh(x, y, width, height);
    item.phase = ResolutionPhase::Finalized;
    trace!("absolute child {}: rect {}", item.index, item.rect);
  }
  Ok(())
}

/// Size on one axis from the style dimension or opposing insets
fn resolve_axis_size<R>(
  ctx: &LayoutContext<'_, R>,
  style: &FlexItemStyle<R>,
  axis: FlexDirection,
  inner: f32,
) -> Option<f32> {
  let dim = style_dimension(style, axis).resolve(inner);
  if is_defined(dim) {
    return Some(dim.max(0.0));
  }
  let leading = axis::leading_position(&style.position, axis, inner);
  let trailing = axis::trailing_position(&style.position, axis, inner);
  if is_defined(leading) && is_defined(trailing) && is_defined(inner) {
    let margin = axis::margin_for_axis(&style.margin, axis, ctx.width_reference());
    return Some((inner - leading - trailing - margin).max(0.0));
  }
  None
}

fn clamp_axis<R>(
  style: &FlexItemStyle<R>,
  axis: FlexDirection,
  value: f32,
  inner: f32,
) -> f32 {
  let min = style_min_dimension(style, axis).resolve(inner);
  let max = style_max_dimension(style, axis).resolve(inner);
  clamp_to_range(value, min, max).max(0.0)
}

enum MainOrCross {
  Main,
  Cross,
}

/// Logical position (from the axis leading edge) of an absolute item
fn position_on_axis<R>(
  ctx: &LayoutContext<'_, R>,
  style: &FlexItemStyle<R>,
  which: MainOrCross,
  size: f32,
  inner: f32,
  outer: f32,
) -> f32 {
  let (axis, border_leading, border_trailing, pb_leading, pb_trailing) = match which {
    MainOrCross::Main => (
      ctx.axes.main,
      ctx.border_main_leading,
      ctx.border_main_trailing,
      ctx.pb_main_leading,
      ctx.pb_main_trailing,
    ),
    MainOrCross::Cross => (
      ctx.axes.cross,
      ctx.border_cross_leading,
      ctx.border_cross_trailing,
      ctx.pb_cross_leading,
      ctx.pb_cross_trailing,
    ),
  };
  let width_ref = ctx.width_reference();
  let leading_margin = axis::leading_margin(&style.margin, axis, width_ref);
  let trailing_margin = axis::trailing_margin(&style.margin, axis, width_ref);

  let leading_inset = axis::leading_position(&style.position, axis, inner);
  if is_defined(leading_inset) {
    return border_leading + leading_inset + leading_margin;
  }
  let trailing_inset = axis::trailing_position(&style.position, axis, inner);
  if is_defined(trailing_inset) {
    return outer - border_trailing - trailing_inset - trailing_margin - size;
  }

  // No insets: fall back to the container's distribution policy.
  let end = || outer - pb_trailing - trailing_margin - size;
  let center = || (outer - size) / 2.0;
  match which {
    MainOrCross::Main => match ctx.container.justify_content {
      JustifyContent::Center => center(),
      JustifyContent::FlexEnd => end(),
      _ => pb_leading + leading_margin,
    },
    MainOrCross::Cross => match style.align_self.resolve(ctx.container.align_items) {
      AlignItems::Center => center(),
      AlignItems::FlexEnd => end(),
      _ => pb_leading + leading_margin,
    },
  }
}
