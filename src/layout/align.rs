//! Cross-axis sizing, justification, and alignment
//!
//! After flexible lengths fix every item's main size, this module measures
//! each item's cross size, resolves line cross extents (including baseline
//! bookkeeping for row containers), distributes lines per `align-content`,
//! justifies items along the main axis per `justify-content` (with auto
//! margins absorbing free space first), aligns items within their line per
//! `align-items`/`align-self`, and assembles the final physical rectangles.

use log::trace;

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::axis::{self, is_reverse, style_dimension};
use crate::layout::bounds::clamp_to_range;
use crate::layout::context::LayoutContext;
use crate::layout::item::{FlexItem, ResolutionPhase};
use crate::layout::lines::FlexLine;
use crate::style::dimension::is_defined;
use crate::style::{AlignContent, AlignItems, FlexWrap, JustifyContent};

/// Measures every in-flow item's cross size
///
/// Items whose cross size is pinned (aspect ratio, definite style dimension,
/// or single-line stretch) are measured exactly; the rest get a fit-content
/// range. This is the second measurement for items whose flex basis came
/// from content.
pub(crate) fn compute_cross_sizes<R>(
  ctx: &LayoutContext<'_, R>,
  in_flow: &[usize],
  items: &mut [FlexItem<R>],
) -> Result<()> {
  for &slot in in_flow {
    let item = &mut items[slot];
    debug_assert_eq!(item.phase, ResolutionPhase::Frozen);
    let style = &ctx.children[item.index];
    let main = item.target_main_size;
    let (min_cross, max_cross) = ctx.item_cross_range(style);
    let cross_margin = ctx.item_cross_margin(style);

    let exact_cross = if let Some(ratio) = style.definite_aspect_ratio() {
      Some(ctx.cross_from_aspect_ratio(ratio, main))
    } else {
      let cross_dim = style_dimension(style, ctx.axes.cross);
      let resolved = cross_dim.resolve(ctx.cross_reference());
      if is_defined(resolved) {
        Some(resolved)
      } else if let Some(exact_inner) = pre_stretch_extent(ctx, style) {
        Some((exact_inner - cross_margin).max(0.0))
      } else {
        None
      }
    };

    match exact_cross {
      Some(cross) => {
        let cross = clamp_to_range(cross, min_cross, max_cross).max(0.0);
        item.cross_definite = true;
        let constraints = ctx.measure_constraints(main, main, cross, cross);
        let measured = item.measure(style, &constraints)?;
        item.cross_size = cross;
        item.baseline = measured.baseline;
      }
      None => {
        item.cross_definite = false;
        let upper = if is_defined(ctx.available_inner_cross) {
          let limit = (ctx.available_inner_cross - cross_margin).max(0.0);
          clamp_to_range(limit, f32::NAN, max_cross)
        } else if is_defined(max_cross) {
          max_cross
        } else {
          f32::NAN
        };
        let lower = if is_defined(min_cross) { min_cross.max(0.0) } else { 0.0 };
        let constraints = ctx.measure_constraints(main, main, lower, upper);
        let measured = item.measure(style, &constraints)?;
        item.cross_size = ctx
          .axes
          .cross_of(measured.width, measured.height)
          .max(lower);
        item.baseline = measured.baseline;
      }
    }
  }
  Ok(())
}

/// Stretch applies before line heights exist only on single-line containers
/// whose cross axis is measured exactly, and only without auto cross
/// margins. An at-most cross bound is not enough: the container may end up
/// smaller than the bound, and the item then stretches to the final line
/// extent instead.
fn pre_stretch_extent<R>(
  ctx: &LayoutContext<'_, R>,
  style: &crate::style::FlexItemStyle<R>,
) -> Option<f32> {
  if !ctx.is_single_line() {
    return None;
  }
  if style.align_self.resolve(ctx.container.align_items) != AlignItems::Stretch {
    return None;
  }
  if ctx.cross_leading_margin_auto(style) || ctx.cross_trailing_margin_auto(style) {
    return None;
  }
  ctx.inner_cross.exact_size()
}

/// Resolves each line's cross extent and baseline bookkeeping
///
/// A row line containing baseline-aligned items is at least as tall as its
/// largest ascent plus largest descent.
pub(crate) fn compute_line_cross_sizes<R>(
  ctx: &LayoutContext<'_, R>,
  lines: &mut [FlexLine],
  items: &[FlexItem<R>],
) {
  for line in lines.iter_mut() {
    let mut max_outer: f32 = 0.0;
    let mut max_ascent: f32 = 0.0;
    let mut max_descent: f32 = 0.0;
    for &slot in &line.items {
      let item = &items[slot];
      let style = &ctx.children[item.index];
      let outer = item.cross_size + ctx.item_cross_margin(style);
      if is_baseline_aligned(ctx, style) {
        let ascent = effective_baseline(ctx, item, style)
          + axis::leading_margin(&style.margin, ctx.axes.cross, ctx.width_reference());
        max_ascent = max_ascent.max(ascent);
        max_descent = max_descent.max(outer - ascent);
      } else {
        max_outer = max_outer.max(outer);
      }
    }
    line.max_baseline = max_ascent;
    line.cross_size = max_outer.max(max_ascent + max_descent);
  }
}

/// Baseline alignment participates on row containers only
fn is_baseline_aligned<R>(ctx: &LayoutContext<'_, R>, style: &crate::style::FlexItemStyle<R>) -> bool {
  ctx.axes.is_main_row()
    && style.align_self.resolve(ctx.container.align_items) == AlignItems::Baseline
}

/// An item's baseline: custom callback, then the measured baseline, then the
/// full cross extent.
pub(crate) fn effective_baseline<R>(
  ctx: &LayoutContext<'_, R>,
  item: &FlexItem<R>,
  style: &crate::style::FlexItemStyle<R>,
) -> f32 {
  let (width, height) = ctx.axes.to_width_height(item.target_main_size, item.cross_size);
  if let Some(baseline) = &style.baseline {
    return baseline(width, height);
  }
  if is_defined(item.baseline) {
    return item.baseline;
  }
  height
}

/// Distributes lines along the cross axis per `align-content`
///
/// Sets each line's logical cross offset (relative to the cross-start
/// content edge) and stretches line extents when requested. Single-line
/// containers simply occupy the full inner cross extent.
pub(crate) fn distribute_lines<R>(
  ctx: &LayoutContext<'_, R>,
  lines: &mut [FlexLine],
  inner_cross: f32,
) {
  if ctx.is_single_line() {
    if let Some(line) = lines.first_mut() {
      line.cross_start = 0.0;
      line.cross_size = inner_cross;
    }
    return;
  }

  let total: f32 = lines.iter().map(|line| line.cross_size).sum();
  let free = inner_cross - total;
  let count = lines.len() as f32;

  let (mut leading, between) = match ctx.container.align_content {
    AlignContent::FlexStart => (0.0, 0.0),
    AlignContent::FlexEnd => (free, 0.0),
    AlignContent::Center => (free / 2.0, 0.0),
    AlignContent::Stretch => {
      if free > 0.0 {
        let extra = free / count;
        for line in lines.iter_mut() {
          line.cross_size += extra;
        }
      }
      (0.0, 0.0)
    }
    AlignContent::SpaceBetween => {
      if lines.len() > 1 && free > 0.0 {
        (0.0, free / (count - 1.0))
      } else {
        (0.0, 0.0)
      }
    }
    AlignContent::SpaceAround => {
      if free > 0.0 {
        let between = free / count;
        (between / 2.0, between)
      } else {
        (free / 2.0, 0.0)
      }
    }
    AlignContent::SpaceEvenly => {
      if free > 0.0 {
        let between = free / (count + 1.0);
        (between, between)
      } else {
        (free / 2.0, 0.0)
      }
    }
  };

  for line in lines.iter_mut() {
    line.cross_start = leading;
    leading += line.cross_size + between;
  }
}

/// Main-axis offsets derived from `justify-content`
struct MainDistribution {
  leading: f32,
  between: f32,
  /// Share each auto main margin absorbs; justification falls back to
  /// flex-start when any is present
  auto_margin_share: f32,
}

fn distribute_main<R>(
  ctx: &LayoutContext<'_, R>,
  line: &FlexLine,
  items: &[FlexItem<R>],
  inner_main: f32,
) -> MainDistribution {
  let free = inner_main - line.main_size;
  let mut auto_margins = 0usize;
  for &slot in &line.items {
    let style = &ctx.children[items[slot].index];
    if ctx.main_leading_margin_auto(style) {
      auto_margins += 1;
    }
    if ctx.main_trailing_margin_auto(style) {
      auto_margins += 1;
    }
  }
  if auto_margins > 0 && free > 0.0 {
    return MainDistribution {
      leading: 0.0,
      between: 0.0,
      auto_margin_share: free / auto_margins as f32,
    };
  }

  let count = line.items.len() as f32;
  let (leading, between) = match ctx.container.justify_content {
    JustifyContent::FlexStart => (0.0, 0.0),
    JustifyContent::FlexEnd => (free, 0.0),
    JustifyContent::Center => (free / 2.0, 0.0),
    JustifyContent::SpaceBetween => {
      if line.items.len() > 1 && free > 0.0 {
        (0.0, free / (count - 1.0))
      } else {
        (0.0, 0.0)
      }
    }
    JustifyContent::SpaceAround => {
      if free > 0.0 {
        let between = free / count;
        (between / 2.0, between)
      } else {
        (free / 2.0, 0.0)
      }
    }
    JustifyContent::SpaceEvenly => {
      if free > 0.0 {
        let between = free / (count + 1.0);
        (between, between)
      } else {
        (free / 2.0, 0.0)
      }
    }
  };
  MainDistribution {
    leading,
    between,
    auto_margin_share: 0.0,
  }
}

/// Positions every item on every line and assembles physical rects
///
/// `inner_main`/`inner_cross` are the container's final content extents;
/// `outer_main`/`outer_cross` the final border-box extents used to flip
/// coordinates on reversed axes and for `wrap-reverse`.
pub(crate) fn position_items<R>(
  ctx: &LayoutContext<'_, R>,
  lines: &mut [FlexLine],
  items: &mut [FlexItem<R>],
  inner_main: f32,
  outer_main: f32,
  outer_cross: f32,
) -> Result<()> {
  let width_ref = ctx.width_reference();
  for (line_index, line) in lines.iter_mut().enumerate() {
    let distribution = distribute_main(ctx, line, items, inner_main);
    let mut pos = ctx.pb_main_leading + distribution.leading;

    for &slot in &line.items {
      let item = &mut items[slot];
      debug_assert_eq!(item.line_index, line_index);
      let style = &ctx.children[item.index];

      let mut leading_margin = axis::leading_margin(&style.margin, ctx.axes.main, width_ref);
      let mut trailing_margin = axis::trailing_margin(&style.margin, ctx.axes.main, width_ref);
      if ctx.main_leading_margin_auto(style) {
        leading_margin += distribution.auto_margin_share;
      }
      if ctx.main_trailing_margin_auto(style) {
        trailing_margin += distribution.auto_margin_share;
      }

      pos += leading_margin;
      let main_logical = pos + axis::relative_offset(&style.position, ctx.axes.main, width_ref);
      pos += item.target_main_size + trailing_margin + distribution.between;

      stretch_to_line(ctx, line, item)?;

      let cross_offset = cross_offset_in_line(ctx, line, item);
      let cross_logical = ctx.pb_cross_leading
        + line.cross_start
        + cross_offset
        + axis::relative_offset(&style.position, ctx.axes.cross, width_ref);

      let main_physical = if is_reverse(ctx.axes.main) {
        outer_main - main_logical - item.target_main_size
      } else {
        main_logical
      };
      let mut cross_physical = if is_reverse(ctx.axes.cross) {
        outer_cross - cross_logical - item.cross_size
      } else {
        cross_logical
      };
      if ctx.wrap() == FlexWrap::WrapReverse {
        cross_physical = outer_cross - cross_physical - item.cross_size;
      }

      let (x, y) = ctx.axes.to_width_height(main_physical, cross_physical);
      let (width, height) = ctx
        .axes
        .to_width_height(item.target_main_size, item.cross_size);
      item.rect = Rect::from_xywh(x, y, width, height);
      item.phase = ResolutionPhase::Finalized;
      trace!("child {}: rect {}", item.index, item.rect);
    }
  }
  Ok(())
}

/// Stretches a fit-content item to its line's cross extent
///
/// Multi-line stretch can only happen once line extents are known; the item
/// is re-measured at the exact size so hosts see the final bounds. This is
/// the third measurement in the worst case.
fn stretch_to_line<R>(
  ctx: &LayoutContext<'_, R>,
  line: &FlexLine,
  item: &mut FlexItem<R>,
) -> Result<()> {
  let style = &ctx.children[item.index];
  let resolved = style.align_self.resolve(ctx.container.align_items);
  if resolved != AlignItems::Stretch
    || item.cross_definite
    || ctx.cross_leading_margin_auto(style)
    || ctx.cross_trailing_margin_auto(style)
  {
    return Ok(());
  }
  let (min_cross, max_cross) = ctx.item_cross_range(style);
  let cross_margin = ctx.item_cross_margin(style);
  let stretched = clamp_to_range((line.cross_size - cross_margin).max(0.0), min_cross, max_cross);
  if (stretched - item.cross_size).abs() <= f32::EPSILON {
    return Ok(());
  }
  if style.measure.is_some() {
    let main = item.target_main_size;
    let constraints = ctx.measure_constraints(main, main, stretched, stretched);
    let measured = item.measure(style, &constraints)?;
    item.baseline = measured.baseline;
  }
  item.cross_size = stretched;
  Ok(())
}

/// Logical cross offset of an item within its line
fn cross_offset_in_line<R>(ctx: &LayoutContext<'_, R>, line: &FlexLine, item: &FlexItem<R>) -> f32 {
  let style = &ctx.children[item.index];
  let width_ref = ctx.width_reference();
  let leading_margin = axis::leading_margin(&style.margin, ctx.axes.cross, width_ref);
  let trailing_margin = axis::trailing_margin(&style.margin, ctx.axes.cross, width_ref);
  let outer = item.cross_size + leading_margin + trailing_margin;
  let free = line.cross_size - outer;

  let leading_auto = ctx.cross_leading_margin_auto(style);
  let trailing_auto = ctx.cross_trailing_margin_auto(style);
  if leading_auto && trailing_auto {
    return leading_margin + (free / 2.0).max(0.0);
  }
  if leading_auto {
    return leading_margin + free.max(0.0);
  }
  if trailing_auto {
    return leading_margin;
  }

  match style.align_self.resolve(ctx.container.align_items) {
    AlignItems::FlexStart | AlignItems::Stretch => leading_margin,
    AlignItems::FlexEnd => line.cross_size - item.cross_size - trailing_margin,
    AlignItems::Center => leading_margin + free / 2.0,
    AlignItems::Baseline => {
      if is_baseline_aligned(ctx, style) {
        line.max_baseline - effective_baseline(ctx, item, style)
      } else {
        leading_margin
      }
    }
  }
}

/// The container's reported baseline
///
/// Row containers report the first line's baseline through the first
/// baseline-aligned item, falling back to the first item; column containers
/// have no baseline.
pub(crate) fn container_baseline<R>(
  ctx: &LayoutContext<'_, R>,
  lines: &[FlexLine],
  items: &[FlexItem<R>],
) -> f32 {
  if !ctx.axes.is_main_row() {
    return f32::NAN;
  }
  let line = match lines.first() {
    Some(line) if !line.items.is_empty() => line,
    _ => return f32::NAN,
  };
  let slot = line
    .items
    .iter()
    .copied()
    .find(|&slot| is_baseline_aligned(ctx, &ctx.children[items[slot].index]))
    .unwrap_or(line.items[0]);
  let item = &items[slot];
  let style = &ctx.children[item.index];
  item.rect.y() + effective_baseline(ctx, item, style)
}
