//! Flex-basis pass
//!
//! Computes every in-flow item's hypothetical main size before any free
//! space is distributed. The candidate order is: explicit `flex-basis`, the
//! definite main-axis style dimension, a size derived from the aspect ratio
//! and a definite cross dimension, and finally an intrinsic measurement of
//! the content.

use log::trace;

use crate::error::Result;
use crate::layout::axis::style_dimension;
use crate::layout::context::LayoutContext;
use crate::layout::item::{FlexItem, ResolutionPhase};
use crate::style::dimension::is_defined;

/// Runs the flex-basis pass over the in-flow items
///
/// `in_flow` lists the participating slots; `display: none` and absolute
/// children never get here.
pub(crate) fn compute_flex_basis_pass<R>(
  ctx: &LayoutContext<'_, R>,
  in_flow: &[usize],
  items: &mut [FlexItem<R>],
) -> Result<()> {
  for &slot in in_flow {
    let item = &mut items[slot];
    debug_assert_eq!(item.phase, ResolutionPhase::Unresolved);
    item.computed_flex_basis = compute_flex_basis(ctx, item)?;
    item.phase = ResolutionPhase::BasisComputed;
    trace!(
      "child {}: flex basis {}",
      item.index,
      item.computed_flex_basis
    );
  }
  Ok(())
}

fn compute_flex_basis<R>(ctx: &LayoutContext<'_, R>, item: &mut FlexItem<R>) -> Result<f32> {
  let style = &ctx.children[item.index];

  // A lone grow+shrink child of an exactly measured container receives all
  // remaining space from the resolver anyway; skip its measurement.
  if ctx.single_flex_child == Some(item.index) {
    return Ok(0.0);
  }

  let basis = style.resolved_flex_basis();
  if basis.is_definite() {
    let resolved = basis.resolve(ctx.main_reference());
    if is_defined(resolved) {
      return Ok(resolved.max(0.0));
    }
  }

  let main_dim = style_dimension(style, ctx.axes.main);
  if main_dim.is_definite() {
    let resolved = main_dim.resolve(ctx.main_reference());
    if is_defined(resolved) {
      return Ok(resolved.max(0.0));
    }
  }

  let cross_dim = style_dimension(style, ctx.axes.cross);
  let cross_resolved = cross_dim.resolve(ctx.cross_reference());
  if let Some(ratio) = style.definite_aspect_ratio() {
    if is_defined(cross_resolved) {
      return Ok(ctx.main_from_aspect_ratio(ratio, cross_resolved).max(0.0));
    }
  }

  // Intrinsic sizing: measure the content within the available inner space.
  // A definite cross dimension pins that axis exactly so hosts wrap (or not)
  // the way they will in the final layout.
  let (cross_min, cross_max) = if is_defined(cross_resolved) {
    let (min_c, max_c) = ctx.item_cross_range(style);
    let pinned = crate::layout::bounds::clamp_to_range(cross_resolved, min_c, max_c);
    (pinned, pinned)
  } else {
    let cross_margin = ctx.item_cross_margin(style);
    let upper = if is_defined(ctx.available_inner_cross) {
      (ctx.available_inner_cross - cross_margin).max(0.0)
    } else {
      f32::NAN
    };
    (0.0, upper)
  };

  let main_margin = ctx.item_main_margin(style);
  let main_upper = if is_defined(ctx.available_inner_main) {
    (ctx.available_inner_main - main_margin).max(0.0)
  } else {
    f32::NAN
  };

  let constraints = ctx.measure_constraints(0.0, main_upper, cross_min, cross_max);
  let measured = item.measure(style, &constraints)?;
  Ok(ctx.axes.main_of(measured.width, measured.height).max(0.0))
}
