//! Flexible length resolution
//!
//! Distributes each line's free main-axis space across its items using grow
//! factors (positive free space) or basis-weighted shrink factors (negative
//! free space). Items whose target hits a min/max bound are frozen at the
//! bound and drop out of the distribution; the remainder is redistributed
//! until no further clamping occurs or no flexible factors remain.
//!
//! Reference: CSS Flexible Box Layout Module Level 1, Section 9.7

use log::trace;

use crate::layout::bounds::clamp_to_range;
use crate::layout::context::LayoutContext;
use crate::layout::item::{FlexItem, ResolutionPhase};
use crate::layout::lines::FlexLine;
use crate::style::dimension::is_defined;

/// Resolves the final main size of every item on a line
pub(crate) fn resolve_flexible_lengths<R>(
  ctx: &LayoutContext<'_, R>,
  line: &mut FlexLine,
  items: &mut [FlexItem<R>],
) {
  let line_space = line_main_space(ctx, line);

  // Hypothetical sizes and flexibility per item on this line.
  for &slot in &line.items {
    let item = &mut items[slot];
    debug_assert_eq!(item.phase, ResolutionPhase::BasisComputed);
    let style = &ctx.children[item.index];
    let (min_main, max_main) = ctx.item_main_range(style);
    item.target_main_size = clamp_to_range(item.computed_flex_basis, min_main, max_main).max(0.0);
  }

  let mut frozen: Vec<bool> = vec![false; line.items.len()];

  loop {
    let free = remaining_free_space(ctx, line, items, &frozen, line_space);

    // Items that cannot flex in the current direction freeze at their
    // hypothetical size.
    let mut froze_inflexible = false;
    for (pos, &slot) in line.items.iter().enumerate() {
      if frozen[pos] {
        continue;
      }
      let style = &ctx.children[items[slot].index];
      let flexible = if free > 0.0 {
        style.resolved_flex_grow() > 0.0
      } else if free < 0.0 {
        style.resolved_flex_shrink() > 0.0 && items[slot].computed_flex_basis > 0.0
      } else {
        false
      };
      if !flexible {
        frozen[pos] = true;
        froze_inflexible = true;
      }
    }
    if froze_inflexible {
      continue;
    }
    if free == 0.0 || frozen.iter().all(|&f| f) {
      break;
    }

    // Distribution factors over the still-flexible items. The first round
    // can reuse the totals the line builder accumulated; later rounds have
    // lost factors to freezing and recompute.
    let growing = free > 0.0;
    let (total_grow, total_shrink_scaled) = if frozen.iter().all(|&f| !f) {
      (line.total_flex_grow, line.total_shrink_scaled)
    } else {
      let mut grow = 0.0;
      let mut shrink_scaled = 0.0;
      for (pos, &slot) in line.items.iter().enumerate() {
        if frozen[pos] {
          continue;
        }
        let style = &ctx.children[items[slot].index];
        grow += style.resolved_flex_grow();
        shrink_scaled += style.resolved_flex_shrink() * items[slot].computed_flex_basis;
      }
      (grow, shrink_scaled)
    };
    let total_factor = if growing { total_grow } else { total_shrink_scaled };
    if total_factor <= 0.0 {
      break;
    }

    let mut any_clamped = false;
    for (pos, &slot) in line.items.iter().enumerate() {
      if frozen[pos] {
        continue;
      }
      let item = &mut items[slot];
      let style = &ctx.children[item.index];
      let base = item.computed_flex_basis;
      let share = if growing {
        free * style.resolved_flex_grow() / total_factor
      } else {
        free * (style.resolved_flex_shrink() * base) / total_factor
      };
      let raw = base + share;
      let (min_main, max_main) = ctx.item_main_range(style);
      let bounded = clamp_to_range(raw, min_main, max_main).max(0.0);
      item.target_main_size = bounded;
      if bounded != raw {
        frozen[pos] = true;
        any_clamped = true;
        trace!(
          "child {}: frozen at {} (wanted {})",
          item.index,
          bounded,
          raw
        );
      }
    }
    if !any_clamped {
      break;
    }
  }

  let mut main_size = 0.0;
  for &slot in &line.items {
    let item = &mut items[slot];
    item.phase = ResolutionPhase::Frozen;
    main_size += item.target_main_size + ctx.item_main_margin(&ctx.children[item.index]);
  }
  line.main_size = main_size;
}

/// The main extent items on this line flex into
///
/// An exactly measured axis pins it directly. When the axis is sized by
/// content, the consumed size stands unless a min or max bound forces
/// growing or shrinking.
fn line_main_space<R>(ctx: &LayoutContext<'_, R>, line: &FlexLine) -> f32 {
  if let Some(exact) = ctx.inner_main.exact_size() {
    return exact;
  }
  let consumed = line.size_consumed;
  if is_defined(ctx.inner_main.min) && consumed < ctx.inner_main.min {
    return ctx.inner_main.min;
  }
  if is_defined(ctx.inner_main.max) && consumed > ctx.inner_main.max {
    return ctx.inner_main.max;
  }
  consumed
}

/// Free space left after frozen targets and unfrozen bases are accounted for
fn remaining_free_space<R>(
  ctx: &LayoutContext<'_, R>,
  line: &FlexLine,
  items: &[FlexItem<R>],
  frozen: &[bool],
  line_space: f32,
) -> f32 {
  let mut used = 0.0;
  for (pos, &slot) in line.items.iter().enumerate() {
    let item = &items[slot];
    let style = &ctx.children[item.index];
    let size = if frozen[pos] {
      item.target_main_size
    } else {
      item.computed_flex_basis
    };
    used += size + ctx.item_main_margin(style);
  }
  line_space - used
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::layout::axis::FlexAxes;
  use crate::layout::bounds::AxisBounds;
  use crate::style::{Dimension, FlexBoxStyle, FlexItemStyle};

  fn run(children: Vec<FlexItemStyle<()>>, inner_main: f32, bases: Vec<f32>) -> Vec<f32> {
    let container = FlexBoxStyle::default();
    let ctx = LayoutContext {
      container: &container,
      children: &children,
      axes: FlexAxes::resolve(&container),
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
    };
    let mut items: Vec<FlexItem<()>> = (0..children.len()).map(FlexItem::new).collect();
    let mut line = FlexLine {
      items: (0..children.len()).collect(),
      total_flex_grow: 0.0,
      total_shrink_scaled: 0.0,
      size_consumed: 0.0,
      main_size: 0.0,
      cross_size: 0.0,
      cross_start: 0.0,
      max_baseline: 0.0,
    };
    for ((item, base), style) in items.iter_mut().zip(&bases).zip(&children) {
      item.computed_flex_basis = *base;
      item.phase = ResolutionPhase::BasisComputed;
      line.size_consumed += base;
      line.total_flex_grow += style.resolved_flex_grow();
      line.total_shrink_scaled += style.resolved_flex_shrink() * base;
    }
    resolve_flexible_lengths(&ctx, &mut line, &mut items);
    items.iter().map(|i| i.target_main_size).collect()
  }

  fn grower(grow: f32) -> FlexItemStyle<()> {
    FlexItemStyle {
      flex_grow: grow,
      ..FlexItemStyle::default()
    }
  }

  #[test]
  fn equal_grow_splits_space_evenly() {
    let targets = run(vec![grower(1.0), grower(1.0)], 300.0, vec![0.0, 0.0]);
    assert_eq!(targets, vec![150.0, 150.0]);
  }

  #[test]
  fn proportional_grow_respects_factors() {
    let targets = run(vec![grower(1.0), grower(3.0)], 400.0, vec![0.0, 0.0]);
    assert_eq!(targets, vec![100.0, 300.0]);
  }

  #[test]
  fn max_bound_freezes_and_redistributes() {
    let capped = FlexItemStyle {
      flex_grow: 1.0,
      max_width: Dimension::points(50.0),
      ..FlexItemStyle::default()
    };
    let targets = run(vec![capped, grower(1.0)], 300.0, vec![0.0, 0.0]);
    assert_eq!(targets, vec![50.0, 250.0]);
  }

  #[test]
  fn shrink_is_weighted_by_basis() {
    // Bases 200 and 100 overflow a 150 container by 150; shrink weights are
    // 200 and 100, so the deficits are 100 and 50.
    let shrinker = FlexItemStyle::<()>::default();
    let targets = run(
      vec![shrinker, FlexItemStyle::default()],
      150.0,
      vec![200.0, 100.0],
    );
    assert_eq!(targets, vec![100.0, 50.0]);
  }

  #[test]
  fn min_bound_limits_shrinking() {
    let floored = FlexItemStyle {
      min_width: Dimension::points(180.0),
      ..FlexItemStyle::default()
    };
    let targets = run(
      vec![floored, FlexItemStyle::default()],
      200.0,
      vec![200.0, 100.0],
    );
    assert_eq!(targets[0], 180.0);
    assert!((targets[1] - 20.0).abs() < 0.001);
  }

  #[test]
  fn inflexible_items_keep_their_basis() {
    let rigid = FlexItemStyle {
      flex_shrink: 0.0,
      ..FlexItemStyle::<()>::default()
    };
    let targets = run(vec![rigid, grower(1.0)], 300.0, vec![120.0, 0.0]);
    assert_eq!(targets, vec![120.0, 180.0]);
  }
}
