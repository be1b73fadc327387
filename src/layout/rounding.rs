//! Pixel grid rounding
//!
//! Fractional layout results are snapped to a physical pixel grid determined
//! by the container's point scale factor. Edges are rounded rather than
//! lengths: each rect's far edge is rounded independently and the size is
//! derived from the difference, which keeps adjacent rects free of
//! one-physical-pixel gaps and overlaps.
//!
//! Items that opt into text rounding get a ceil/floor policy on the far edge
//! so fractional glyph extents never lose a covering pixel.

use crate::geometry::Rect;
use crate::layout::item::FlexItem;
use crate::style::FlexItemStyle;

/// Double-precision tolerance for "already on the grid" tests
const GRID_EPSILON: f64 = 0.0001;

fn double_near(a: f64, b: f64) -> bool {
  (a - b).abs() < GRID_EPSILON
}

/// Snaps one value to the grid
///
/// The fractional part is normalized into `[0, 1)` so negative coordinates
/// round with the same policy as positive ones (monotonic floor/ceil rather
/// than away-from-zero).
pub(crate) fn round_value_to_pixel_grid(
  value: f32,
  scale: f32,
  force_ceil: bool,
  force_floor: bool,
) -> f32 {
  let scale = scale as f64;
  let mut scaled = value as f64 * scale;
  let mut fractional = scaled % 1.0;
  if fractional < 0.0 {
    fractional += 1.0;
  }
  if double_near(fractional, 0.0) {
    scaled -= fractional;
  } else if double_near(fractional, 1.0) {
    scaled = scaled - fractional + 1.0;
  } else if force_ceil {
    scaled = scaled - fractional + 1.0;
  } else if force_floor {
    scaled -= fractional;
  } else {
    scaled = scaled - fractional + if fractional >= 0.5 { 1.0 } else { 0.0 };
  }
  (scaled / scale) as f32
}

/// Rounds a rect in place, deriving the size from rounded edges
fn round_rect(rect: Rect, scale: f32, text_rounding: bool) -> Rect {
  let left = rect.x();
  let top = rect.y();
  let right = rect.max_x();
  let bottom = rect.max_y();

  let fractional_width = {
    let scaled = (rect.width() * scale) as f64 % 1.0;
    !double_near(scaled, 0.0) && !double_near(scaled, 1.0)
  };
  let fractional_height = {
    let scaled = (rect.height() * scale) as f64 % 1.0;
    !double_near(scaled, 0.0) && !double_near(scaled, 1.0)
  };

  let rounded_left = round_value_to_pixel_grid(left, scale, false, text_rounding);
  let rounded_top = round_value_to_pixel_grid(top, scale, false, text_rounding);
  let rounded_right = round_value_to_pixel_grid(
    right,
    scale,
    text_rounding && fractional_width,
    text_rounding && !fractional_width,
  );
  let rounded_bottom = round_value_to_pixel_grid(
    bottom,
    scale,
    text_rounding && fractional_height,
    text_rounding && !fractional_height,
  );

  Rect::from_xywh(
    rounded_left,
    rounded_top,
    rounded_right - rounded_left,
    rounded_bottom - rounded_top,
  )
}

/// Rounds the container size and every item rect to the pixel grid
///
/// A non-positive or non-finite scale factor is a style contract violation;
/// the pass falls back to the identity scale rather than aborting.
pub(crate) fn round_layout_results<R>(
  scale: f32,
  container_width: &mut f32,
  container_height: &mut f32,
  items: &mut [FlexItem<R>],
  children: &[FlexItemStyle<R>],
) {
  let scale = if scale.is_finite() && scale > 0.0 {
    scale
  } else {
    1.0
  };

  let container = round_rect(
    Rect::from_xywh(0.0, 0.0, *container_width, *container_height),
    scale,
    false,
  );
  *container_width = container.width();
  *container_height = container.height();

  for item in items.iter_mut() {
    let text_rounding = children[item.index].enable_text_rounding;
    item.rect = round_rect(item.rect, scale, text_rounding);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rounds_half_up_on_unit_grid() {
    assert_eq!(round_value_to_pixel_grid(1.4, 1.0, false, false), 1.0);
    assert_eq!(round_value_to_pixel_grid(1.5, 1.0, false, false), 2.0);
    assert_eq!(round_value_to_pixel_grid(1.6, 1.0, false, false), 2.0);
  }

  #[test]
  fn respects_fractional_scales() {
    // On a 2x grid, half physical pixels are representable.
    assert_eq!(round_value_to_pixel_grid(1.2, 2.0, false, false), 1.0);
    assert_eq!(round_value_to_pixel_grid(1.25, 2.0, false, false), 1.5);
  }

  #[test]
  fn negative_values_round_monotonically() {
    // -1.5 and 0.5 sit on the same grid offset; both snap upward.
    assert_eq!(round_value_to_pixel_grid(-1.5, 1.0, false, false), -1.0);
    assert_eq!(round_value_to_pixel_grid(0.5, 1.0, false, false), 1.0);
    assert_eq!(round_value_to_pixel_grid(-1.6, 1.0, false, false), -2.0);
  }

  #[test]
  fn adjacent_edges_stay_adjacent() {
    let a = round_rect(Rect::from_xywh(0.0, 0.0, 33.3, 10.0), 1.0, false);
    let b = round_rect(Rect::from_xywh(33.3, 0.0, 33.3, 10.0), 1.0, false);
    assert_eq!(a.max_x(), b.x());
  }

  #[test]
  fn text_rounding_keeps_pixel_coverage() {
    // A fractional text width must not lose its covering pixel.
    let r = round_rect(Rect::from_xywh(0.2, 0.0, 10.3, 10.0), 1.0, true);
    assert_eq!(r.x(), 0.0);
    assert!(r.width() >= 10.3_f32.floor() + 1.0);
  }
}
