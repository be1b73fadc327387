//! Serializable layout snapshots
//!
//! A [`LayoutSnapshot`] is a plain-data copy of a [`LayoutOutput`] suitable
//! for golden tests and host-side diagnostics. Host result handles are not
//! captured; NaN baselines become `None` so snapshots serialize cleanly.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutOutput;

/// One child rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSnapshot {
  pub left: f32,
  pub top: f32,
  pub width: f32,
  pub height: f32,
}

/// Container size plus child rectangles, in child order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
  pub width: f32,
  pub height: f32,
  pub baseline: Option<f32>,
  pub children: Vec<RectSnapshot>,
}

impl LayoutSnapshot {
  /// Captures the geometry of a layout output
  pub fn capture<R>(output: &LayoutOutput<R>) -> Self {
    Self {
      width: output.width,
      height: output.height,
      baseline: if output.baseline.is_nan() {
        None
      } else {
        Some(output.baseline)
      },
      children: output
        .children
        .iter()
        .map(|child| RectSnapshot {
          left: child.left,
          top: child.top,
          width: child.width,
          height: child.height,
        })
        .collect(),
    }
  }
}
