//! Per-item layout state
//!
//! One [`FlexItem`] record accompanies each child style for the duration of a
//! layout call. It accumulates the results of the successive passes (flex
//! basis, flexible length resolution, cross sizing, positioning) together
//! with the item's measurement cache, and is torn down when the call returns.

use log::trace;

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::bounds::clamp_to_range;
use crate::layout::cache::MeasureCache;
use crate::style::dimension::is_defined;
use crate::style::item::MeasureConstraints;
use crate::style::FlexItemStyle;

/// Where an item is in the resolution pipeline
///
/// `Unresolved` → `BasisComputed` after the flex-basis pass, → `Frozen` once
/// flexible length resolution has fixed the main size, → `Finalized` after
/// cross sizing and positioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolutionPhase {
  Unresolved,
  BasisComputed,
  Frozen,
  Finalized,
}

/// Dimensions a measurement produced for an item
#[derive(Debug, Clone, Copy)]
pub(crate) struct MeasuredSize {
  pub width: f32,
  pub height: f32,
  pub baseline: f32,
}

/// Mutable per-call state for one child
#[derive(Debug)]
pub(crate) struct FlexItem<R> {
  /// Index into the input children slice
  pub index: usize,
  /// Hypothetical main size before free space distribution
  pub computed_flex_basis: f32,
  /// Main size fixed by flexible length resolution
  pub target_main_size: f32,
  /// Cross size fixed by cross-axis sizing
  pub cross_size: f32,
  /// Whether the cross size was pinned exactly (style, aspect ratio, or
  /// single-line stretch) rather than measured fit-content
  pub cross_definite: bool,
  /// Baseline offset from the item's top edge (NaN when absent)
  pub baseline: f32,
  /// Which flex line the item landed on
  pub line_index: usize,
  pub phase: ResolutionPhase,
  /// Final border-box rectangle, relative to the container
  pub rect: Rect,
  /// Memoized host measurements
  pub cache: MeasureCache<R>,
  /// Cache entry behind the most recent measurement, if any
  pub last_measurement: Option<usize>,
}

impl<R> FlexItem<R> {
  pub(crate) fn new(index: usize) -> Self {
    Self {
      index,
      computed_flex_basis: f32::NAN,
      target_main_size: f32::NAN,
      cross_size: f32::NAN,
      cross_definite: false,
      baseline: f32::NAN,
      line_index: 0,
      phase: ResolutionPhase::Unresolved,
      rect: Rect::ZERO,
      cache: MeasureCache::new(),
      last_measurement: None,
    }
  }

  /// Measures the item under the given constraints, consulting the cache
  ///
  /// Items without a measurement callback have an intrinsic content size of
  /// zero on both axes; the constraints still clamp it. Callback results are
  /// clamped into the constraints before use so a misbehaving host cannot
  /// push an item outside its bounds. A host error aborts layout.
  pub(crate) fn measure(
    &mut self,
    style: &FlexItemStyle<R>,
    constraints: &MeasureConstraints,
  ) -> Result<MeasuredSize> {
    if let Some(index) = self.cache.lookup(constraints) {
      trace!("child {}: measurement cache hit", self.index);
      self.last_measurement = Some(index);
      let entry = self.cache.entry(index);
      return Ok(MeasuredSize {
        width: entry.width,
        height: entry.height,
        baseline: entry.baseline,
      });
    }

    let (width, height, baseline, result) = match &style.measure {
      Some(measure) => {
        let output = measure(constraints).map_err(|source| Error::Measurement {
          child_index: self.index,
          source,
        })?;
        (output.width, output.height, output.baseline, Some(output.result))
      }
      None => (0.0, 0.0, f32::NAN, None),
    };

    let width = sanitize_measured(width, constraints.min_width, constraints.max_width);
    let height = sanitize_measured(height, constraints.min_height, constraints.max_height);

    trace!(
      "child {}: measured {}x{} under [{}..{}, {}..{}]",
      self.index,
      width,
      height,
      constraints.min_width,
      constraints.max_width,
      constraints.min_height,
      constraints.max_height
    );

    let index = self
      .cache
      .record(constraints, width, height, baseline, result);
    self.last_measurement = Some(index);
    Ok(MeasuredSize {
      width,
      height,
      baseline,
    })
  }

  /// Takes the host result that backs this item's final rect
  pub(crate) fn take_final_result(&mut self) -> Option<R> {
    self
      .last_measurement
      .and_then(|index| self.cache.take_result(index))
  }
}

/// Clamps a measured extent into its constraints
///
/// A NaN result against a defined bound collapses to the nearest bound
/// (measurement anomaly handling); otherwise the result is clamped normally
/// and floored at zero.
fn sanitize_measured(value: f32, min: f32, max: f32) -> f32 {
  if !value.is_finite() {
    if is_defined(max) {
      return max.max(0.0);
    }
    if is_defined(min) {
      return min.max(0.0);
    }
    return 0.0;
  }
  clamp_to_range(value, min, max).max(0.0)
}
