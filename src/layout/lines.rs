//! Flex line construction
//!
//! With every item's flex basis fixed, items are grouped into lines. A line
//! breaks when wrapping is enabled, the line already holds an item, and the
//! next item's outer hypothetical size would exceed the available inner main
//! extent.

use log::trace;

use crate::layout::bounds::clamp_to_range;
use crate::layout::context::LayoutContext;
use crate::layout::item::FlexItem;
use crate::style::dimension::is_defined;
use crate::style::FlexWrap;

/// One row (or column) of items between wrap breaks
#[derive(Debug)]
pub(crate) struct FlexLine {
  /// Indices into the in-flow item slice
  pub items: Vec<usize>,
  /// Sum of grow factors on the line
  pub total_flex_grow: f32,
  /// Sum of `flex_shrink · computed_flex_basis` on the line
  pub total_shrink_scaled: f32,
  /// Outer hypothetical main size consumed by the line
  pub size_consumed: f32,
  /// Final main extent (targets plus margins), set by the resolver
  pub main_size: f32,
  /// Cross extent of the line, set during cross sizing
  pub cross_size: f32,
  /// Logical offset of the line from the cross-start content edge
  pub cross_start: f32,
  /// Largest ascent among baseline-aligned items (row containers)
  pub max_baseline: f32,
}

impl FlexLine {
  fn new() -> Self {
    Self {
      items: Vec::new(),
      total_flex_grow: 0.0,
      total_shrink_scaled: 0.0,
      size_consumed: 0.0,
      main_size: 0.0,
      cross_size: 0.0,
      cross_start: 0.0,
      max_baseline: 0.0,
    }
  }
}

/// Assigns items to lines and accumulates per-line totals
///
/// `in_flow` lists the slots (into `items`) that participate in line
/// sizing, in child order.
pub(crate) fn build_lines<R>(
  ctx: &LayoutContext<'_, R>,
  in_flow: &[usize],
  items: &mut [FlexItem<R>],
) -> Vec<FlexLine> {
  let mut lines: Vec<FlexLine> = Vec::new();
  let mut current = FlexLine::new();
  let wrapping = ctx.wrap() != FlexWrap::NoWrap;
  let limit = ctx.available_inner_main;

  for &slot in in_flow {
    let item = &mut items[slot];
    let style = &ctx.children[item.index];
    let (min_main, max_main) = ctx.item_main_range(style);
    let hypothetical = clamp_to_range(item.computed_flex_basis, min_main, max_main);
    let outer = hypothetical + ctx.item_main_margin(style);

    if wrapping
      && !current.items.is_empty()
      && is_defined(limit)
      && current.size_consumed + outer > limit
    {
      trace!(
        "line {} breaks before child {} ({} + {} > {})",
        lines.len(),
        item.index,
        current.size_consumed,
        outer,
        limit
      );
      lines.push(current);
      current = FlexLine::new();
    }

    item.line_index = lines.len();
    current.items.push(slot);
    current.size_consumed += outer;
    current.total_flex_grow += style.resolved_flex_grow();
    current.total_shrink_scaled += style.resolved_flex_shrink() * item.computed_flex_basis;
  }

  if !current.items.is_empty() || lines.is_empty() {
    lines.push(current);
  }
  lines
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::layout::axis::FlexAxes;
  use crate::layout::bounds::AxisBounds;
  use crate::style::{FlexBoxStyle, FlexItemStyle};

  fn context<'a>(
    container: &'a FlexBoxStyle,
    children: &'a [FlexItemStyle<()>],
    inner_main: f32,
  ) -> LayoutContext<'a, ()> {
    LayoutContext {
      container,
      children,
      axes: FlexAxes::resolve(container),
      inner_main: AxisBounds::exact(inner_main),
      inner_cross: AxisBounds::unconstrained(),
      available_inner_main: inner_main,
      available_inner_cross: f32::NAN,
      pb_main_leading: 0.0,
      pb_main_trailing: 0.0,
      pb_cross_leading: 0.0,
      pb_cross_trailing: 0.0,
      border_main_leading: 0.0,
      border_main_trailing: 0.0,
      border_cross_leading: 0.0,
      border_cross_trailing: 0.0,
      single_flex_child: None,
    }
  }

  #[test]
  fn no_wrap_keeps_everything_on_one_line() {
    let container = FlexBoxStyle::default();
    let children: Vec<FlexItemStyle<()>> = (0..3).map(|_| FlexItemStyle::default()).collect();
    let ctx = context(&container, &children, 200.0);
    let mut items: Vec<FlexItem<()>> = (0..3).map(FlexItem::new).collect();
    for item in &mut items {
      item.computed_flex_basis = 120.0;
    }

    let slots: Vec<usize> = (0..items.len()).collect();
    let lines = build_lines(&ctx, &slots, &mut items);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].items.len(), 3);
  }

  #[test]
  fn wrap_breaks_when_line_overflows() {
    let container = FlexBoxStyle {
      flex_wrap: FlexWrap::Wrap,
      ..FlexBoxStyle::default()
    };
    let children: Vec<FlexItemStyle<()>> = (0..3).map(|_| FlexItemStyle::default()).collect();
    let ctx = context(&container, &children, 200.0);
    let mut items: Vec<FlexItem<()>> = (0..3).map(FlexItem::new).collect();
    for item in &mut items {
      item.computed_flex_basis = 120.0;
    }

    let slots: Vec<usize> = (0..items.len()).collect();
    let lines = build_lines(&ctx, &slots, &mut items);
    assert_eq!(lines.len(), 3);
    assert_eq!(items[1].line_index, 1);
    assert_eq!(items[2].line_index, 2);
  }

  #[test]
  fn empty_input_yields_one_empty_line() {
    let container = FlexBoxStyle::default();
    let children: Vec<FlexItemStyle<()>> = Vec::new();
    let ctx = context(&container, &children, 100.0);
    let lines = build_lines(&ctx, &[], &mut []);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].items.is_empty());
  }
}
