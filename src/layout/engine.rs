//! Layout driver
//!
//! [`calculate_layout`] is the library entry point. It orchestrates the
//! passes over a container and its children:
//!
//! 1. Resolve the container direction and axes; resolve padding and border.
//! 2. Compute inner available bounds from the caller's constraints.
//! 3. Run the flex-basis pass over in-flow children.
//! 4. Build flex lines.
//! 5. Resolve flexible lengths per line.
//! 6. Compute cross-axis sizes per item and per line.
//! 7. Determine the container size from content where not measured exactly.
//! 8. Justify and align; assemble child rects.
//! 9. Lay out absolutely positioned children.
//! 10. Round everything to the pixel grid.
//! 11. Populate the layout output.
//!
//! All state is created at entry and destroyed at return; callbacks into the
//! host are synchronous and may run many times within one call.

use log::{debug, trace};

use crate::error::Result;
use crate::layout::absolute::layout_absolute_children;
use crate::layout::align::{
  compute_cross_sizes, compute_line_cross_sizes, container_baseline, distribute_lines,
  position_items,
};
use crate::layout::axis::{self, FlexAxes};
use crate::layout::bounds::AxisBounds;
use crate::layout::context::LayoutContext;
use crate::layout::flex_basis::compute_flex_basis_pass;
use crate::layout::item::{FlexItem, ResolutionPhase};
use crate::layout::lines::build_lines;
use crate::layout::resolve::resolve_flexible_lengths;
use crate::layout::rounding::round_layout_results;
use crate::style::types::{Display, PositionType};
use crate::style::{FlexBoxStyle, FlexItemStyle};

/// Final geometry of one child, in input order
#[derive(Debug)]
pub struct ChildLayout<R> {
  /// Left edge relative to the container's border box
  pub left: f32,
  /// Top edge relative to the container's border box
  pub top: f32,
  pub width: f32,
  pub height: f32,
  /// The opaque host result behind the child's final measurement, if any
  pub result: Option<R>,
}

/// Result of one layout call
#[derive(Debug)]
pub struct LayoutOutput<R> {
  /// Container border-box width
  pub width: f32,
  /// Container border-box height
  pub height: f32,
  /// Container baseline from its top edge; NaN when it has none
  pub baseline: f32,
  /// One entry per input child, in input order
  pub children: Vec<ChildLayout<R>>,
}

/// Computes a flex layout for a container and its children
///
/// The four bounds constrain the container's border box: an equal finite
/// pair measures the axis exactly, infinities leave it unbounded, and NaN
/// components are treated as absent. `owner_width` resolves the container's
/// own percentage padding and border; pass NaN when there is no owner.
///
/// # Examples
///
/// ```
/// use flexlayout::{calculate_layout, FlexBoxStyle, FlexItemStyle};
///
/// let container = FlexBoxStyle::default();
/// let children: Vec<FlexItemStyle<()>> = vec![
///     FlexItemStyle { flex_grow: 1.0, ..FlexItemStyle::default() },
///     FlexItemStyle { flex_grow: 1.0, ..FlexItemStyle::default() },
/// ];
///
/// let output =
///     calculate_layout(&container, &children, 300.0, 300.0, 100.0, 100.0, f32::NAN).unwrap();
/// assert_eq!(output.width, 300.0);
/// assert_eq!(output.children[0].width, 150.0);
/// assert_eq!(output.children[1].left, 150.0);
/// ```
pub fn calculate_layout<R>(
  container: &FlexBoxStyle,
  children: &[FlexItemStyle<R>],
  min_width: f32,
  max_width: f32,
  min_height: f32,
  max_height: f32,
  owner_width: f32,
) -> Result<LayoutOutput<R>> {
  let axes = FlexAxes::resolve(container);
  debug!(
    "layout: {} children, main axis {:?}, bounds w[{}, {}] h[{}, {}]",
    children.len(),
    axes.main,
    min_width,
    max_width,
    min_height,
    max_height
  );

  // Container padding and border, resolved against the owner width.
  let padding_main_leading = axis::leading_inset(&container.padding, axes.main, owner_width);
  let padding_main_trailing = axis::trailing_inset(&container.padding, axes.main, owner_width);
  let padding_cross_leading = axis::leading_inset(&container.padding, axes.cross, owner_width);
  let padding_cross_trailing = axis::trailing_inset(&container.padding, axes.cross, owner_width);
  let border_main_leading = axis::leading_inset(&container.border, axes.main, owner_width);
  let border_main_trailing = axis::trailing_inset(&container.border, axes.main, owner_width);
  let border_cross_leading = axis::leading_inset(&container.border, axes.cross, owner_width);
  let border_cross_trailing = axis::trailing_inset(&container.border, axes.cross, owner_width);

  let pb_main_leading = padding_main_leading + border_main_leading;
  let pb_main_trailing = padding_main_trailing + border_main_trailing;
  let pb_cross_leading = padding_cross_leading + border_cross_leading;
  let pb_cross_trailing = padding_cross_trailing + border_cross_trailing;
  let pb_main = pb_main_leading + pb_main_trailing;
  let pb_cross = pb_cross_leading + pb_cross_trailing;

  let width_bounds = AxisBounds::new(absent_as(min_width, f32::NEG_INFINITY), absent_as(max_width, f32::INFINITY));
  let height_bounds = AxisBounds::new(absent_as(min_height, f32::NEG_INFINITY), absent_as(max_height, f32::INFINITY));
  let (outer_main_bounds, outer_cross_bounds) = if axes.is_main_row() {
    (width_bounds, height_bounds)
  } else {
    (height_bounds, width_bounds)
  };
  let inner_main = outer_main_bounds.inset_by(pb_main);
  let inner_cross = outer_cross_bounds.inset_by(pb_cross);

  // Partition children once; display:none items finalize immediately with a
  // zero rect and contribute nothing anywhere.
  let mut items: Vec<FlexItem<R>> = (0..children.len()).map(FlexItem::new).collect();
  let mut in_flow: Vec<usize> = Vec::new();
  let mut absolute: Vec<usize> = Vec::new();
  for (index, style) in children.iter().enumerate() {
    if style.display == Display::None {
      items[index].target_main_size = 0.0;
      items[index].cross_size = 0.0;
      items[index].phase = ResolutionPhase::Finalized;
    } else if style.position_type == PositionType::Absolute {
      absolute.push(index);
    } else {
      in_flow.push(index);
    }
  }

  let single_flex_child = find_single_flex_child(children, &in_flow, &inner_main);

  let ctx = LayoutContext {
    container,
    children,
    axes,
    inner_main,
    inner_cross,
    available_inner_main: inner_main.upper_or_undefined(),
    available_inner_cross: inner_cross.upper_or_undefined(),
    pb_main_leading,
    pb_main_trailing,
    pb_cross_leading,
    pb_cross_trailing,
    border_main_leading,
    border_main_trailing,
    border_cross_leading,
    border_cross_trailing,
    single_flex_child,
  };

  compute_flex_basis_pass(&ctx, &in_flow, &mut items)?;
  let mut lines = build_lines(&ctx, &in_flow, &mut items);
  trace!("{} line(s)", lines.len());
  for line in &mut lines {
    resolve_flexible_lengths(&ctx, line, &mut items);
  }
  compute_cross_sizes(&ctx, &in_flow, &mut items)?;
  compute_line_cross_sizes(&ctx, &mut lines, &items);

  // Container size: measured exactly where the bounds pin it, sized to
  // content (then clamped) otherwise.
  let content_main = lines
    .iter()
    .map(|line| line.main_size)
    .fold(0.0_f32, f32::max);
  let inner_main_final = inner_main
    .exact_size()
    .unwrap_or_else(|| inner_main.clamp(content_main).max(0.0));
  let content_cross: f32 = lines.iter().map(|line| line.cross_size).sum();
  let inner_cross_final = inner_cross
    .exact_size()
    .unwrap_or_else(|| inner_cross.clamp(content_cross).max(0.0));
  let outer_main = inner_main_final + pb_main;
  let outer_cross = inner_cross_final + pb_cross;

  distribute_lines(&ctx, &mut lines, inner_cross_final);
  position_items(
    &ctx,
    &mut lines,
    &mut items,
    inner_main_final,
    outer_main,
    outer_cross,
  )?;
  let baseline = container_baseline(&ctx, &lines, &items);
  layout_absolute_children(
    &ctx,
    &absolute,
    &mut items,
    inner_main_final,
    inner_cross_final,
    outer_main,
    outer_cross,
  )?;

  let (mut width, mut height) = axes.to_width_height(outer_main, outer_cross);
  round_layout_results(
    container.point_scale_factor,
    &mut width,
    &mut height,
    &mut items,
    children,
  );

  debug!("layout done: container {}x{}", width, height);
  let children_out = items
    .into_iter()
    .map(|mut item| ChildLayout {
      left: item.rect.x(),
      top: item.rect.y(),
      width: item.rect.width(),
      height: item.rect.height(),
      result: item.take_final_result(),
    })
    .collect();

  Ok(LayoutOutput {
    width,
    height,
    baseline,
    children: children_out,
  })
}

/// NaN constraint components are absent; substitute the unbounded value
fn absent_as(value: f32, fallback: f32) -> f32 {
  if value.is_nan() {
    fallback
  } else {
    value
  }
}

/// Finds the one child that may skip flex-basis measurement
///
/// When exactly one in-flow child is flexible, it has both a grow and a
/// shrink factor, and the main axis is measured exactly, the resolver hands
/// it the remaining space regardless of its basis.
fn find_single_flex_child<R>(
  children: &[FlexItemStyle<R>],
  in_flow: &[usize],
  inner_main: &AxisBounds,
) -> Option<usize> {
  if inner_main.exact_size().is_none() {
    return None;
  }
  let mut single: Option<usize> = None;
  for &index in in_flow {
    let style = &children[index];
    let grow = style.resolved_flex_grow();
    let shrink = style.resolved_flex_shrink();
    if grow != 0.0 || shrink != 0.0 {
      if single.is_some() {
        return None;
      }
      if grow > 0.0 && shrink > 0.0 {
        single = Some(index);
      } else {
        return None;
      }
    }
  }
  single
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::style::Dimension;

  #[test]
  fn empty_children_size_to_padding_and_bounds() {
    let container = FlexBoxStyle {
      padding: crate::style::EdgeValues::all(Dimension::points(10.0)),
      ..FlexBoxStyle::default()
    };
    let children: Vec<FlexItemStyle<()>> = Vec::new();
    let output = calculate_layout(
      &container,
      &children,
      f32::NEG_INFINITY,
      f32::INFINITY,
      f32::NEG_INFINITY,
      f32::INFINITY,
      f32::NAN,
    )
    .unwrap();
    assert_eq!(output.width, 20.0);
    assert_eq!(output.height, 20.0);
    assert!(output.children.is_empty());
  }

  #[test]
  fn display_none_children_get_zero_rects() {
    let container = FlexBoxStyle::default();
    let children = vec![
      FlexItemStyle::<()> {
        display: Display::None,
        width: Dimension::points(50.0),
        height: Dimension::points(50.0),
        ..FlexItemStyle::default()
      },
      FlexItemStyle::<()> {
        width: Dimension::points(40.0),
        height: Dimension::points(40.0),
        ..FlexItemStyle::default()
      },
    ];
    let output =
      calculate_layout(&container, &children, 200.0, 200.0, 100.0, 100.0, f32::NAN).unwrap();
    assert_eq!(output.children[0].width, 0.0);
    assert_eq!(output.children[0].height, 0.0);
    // The hidden child does not shift its sibling.
    assert_eq!(output.children[1].left, 0.0);
    assert_eq!(output.children[1].width, 40.0);
  }

  #[test]
  fn single_flex_child_shortcut_requires_exact_main() {
    let children = vec![FlexItemStyle::<()> {
      flex_grow: 1.0,
      ..FlexItemStyle::default()
    }];
    let in_flow = vec![0];
    assert_eq!(
      find_single_flex_child(&children, &in_flow, &AxisBounds::exact(100.0)),
      Some(0)
    );
    assert_eq!(
      find_single_flex_child(&children, &in_flow, &AxisBounds::at_most(100.0)),
      None
    );
  }
}
