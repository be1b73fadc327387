//! Per-item measurement cache
//!
//! Flexbox needs the same child measured up to three times per layout with
//! potentially identical constraints: once for its flex basis, once while
//! resolving flexible lengths, and once more for cross-axis stretch.
//! Memoizing on the constraint quadruple turns the worst-case exponential
//! re-measurement of nested hosts into one call per distinct constraint set.
//!
//! The cache lives on the per-call item record and is destroyed with it;
//! nothing is shared across layout calls.

use crate::style::item::MeasureConstraints;

/// Maximum number of cached measurements per item
///
/// Empirically, the most complicated layouts should not require more than 16
/// entries; the ring evicts round-robin beyond that.
pub const MAX_CACHED_MEASUREMENTS: usize = 16;

/// Constraints within this distance of a cached key are considered equal
pub(crate) const CONSTRAINT_TOLERANCE: f32 = 0.0001;

/// One memoized measurement
#[derive(Debug)]
pub(crate) struct CachedMeasurement<R> {
  pub min_width: f32,
  pub max_width: f32,
  pub min_height: f32,
  pub max_height: f32,
  pub width: f32,
  pub height: f32,
  pub baseline: f32,
  /// Host-owned result; taken at most once when the layout output is built
  pub result: Option<R>,
}

/// Ring cache of the most recent measurements for one item
#[derive(Debug)]
pub(crate) struct MeasureCache<R> {
  entries: Vec<CachedMeasurement<R>>,
  next_index: usize,
}

/// Two constraint components match when equal (including both undefined or
/// the same infinity) or within [`CONSTRAINT_TOLERANCE`].
#[inline]
fn component_matches(a: f32, b: f32) -> bool {
  a == b || (a.is_nan() && b.is_nan()) || (a - b).abs() < CONSTRAINT_TOLERANCE
}

impl<R> MeasureCache<R> {
  pub(crate) fn new() -> Self {
    Self {
      entries: Vec::new(),
      next_index: 0,
    }
  }

  /// Finds a cached entry matching all four constraints
  pub(crate) fn lookup(&self, constraints: &MeasureConstraints) -> Option<usize> {
    self.entries.iter().position(|entry| {
      component_matches(entry.min_width, constraints.min_width)
        && component_matches(entry.max_width, constraints.max_width)
        && component_matches(entry.min_height, constraints.min_height)
        && component_matches(entry.max_height, constraints.max_height)
    })
  }

  /// Records a measurement, evicting round-robin once the ring is full
  ///
  /// Returns the index of the stored entry.
  pub(crate) fn record(
    &mut self,
    constraints: &MeasureConstraints,
    width: f32,
    height: f32,
    baseline: f32,
    result: Option<R>,
  ) -> usize {
    let entry = CachedMeasurement {
      min_width: constraints.min_width,
      max_width: constraints.max_width,
      min_height: constraints.min_height,
      max_height: constraints.max_height,
      width,
      height,
      baseline,
      result,
    };
    if self.entries.len() < MAX_CACHED_MEASUREMENTS {
      self.entries.push(entry);
      self.entries.len() - 1
    } else {
      let index = self.next_index;
      self.entries[index] = entry;
      self.next_index = (index + 1) % MAX_CACHED_MEASUREMENTS;
      index
    }
  }

  pub(crate) fn entry(&self, index: usize) -> &CachedMeasurement<R> {
    &self.entries[index]
  }

  /// Moves the host result out of an entry
  pub(crate) fn take_result(&mut self, index: usize) -> Option<R> {
    self.entries[index].result.take()
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn constraints(min_w: f32, max_w: f32, min_h: f32, max_h: f32) -> MeasureConstraints {
    MeasureConstraints {
      min_width: min_w,
      max_width: max_w,
      min_height: min_h,
      max_height: max_h,
      owner_width: f32::NAN,
      owner_height: f32::NAN,
    }
  }

  #[test]
  fn lookup_matches_within_tolerance() {
    let mut cache: MeasureCache<()> = MeasureCache::new();
    let key = constraints(0.0, 100.0, 0.0, 50.0);
    cache.record(&key, 80.0, 40.0, f32::NAN, None);

    let near = constraints(0.00005, 100.00005, 0.0, 50.0);
    let index = cache.lookup(&near).expect("tolerance hit");
    assert_eq!(cache.entry(index).width, 80.0);

    let far = constraints(0.0, 100.2, 0.0, 50.0);
    assert!(cache.lookup(&far).is_none());
  }

  #[test]
  fn undefined_and_unbounded_constraints_match_themselves() {
    let mut cache: MeasureCache<()> = MeasureCache::new();
    let key = constraints(0.0, f32::INFINITY, f32::NAN, f32::NAN);
    cache.record(&key, 10.0, 10.0, f32::NAN, None);
    assert!(cache.lookup(&key).is_some());
  }

  #[test]
  fn ring_evicts_round_robin() {
    let mut cache: MeasureCache<u32> = MeasureCache::new();
    for i in 0..MAX_CACHED_MEASUREMENTS {
      let key = constraints(i as f32, i as f32 + 100.0, 0.0, 0.0);
      cache.record(&key, i as f32, 0.0, f32::NAN, Some(i as u32));
    }
    assert_eq!(cache.len(), MAX_CACHED_MEASUREMENTS);

    // The next record overwrites the oldest entry.
    let key = constraints(500.0, 600.0, 0.0, 0.0);
    let index = cache.record(&key, 1.0, 1.0, f32::NAN, Some(99));
    assert_eq!(index, 0);
    assert!(cache
      .lookup(&constraints(0.0, 100.0, 0.0, 0.0))
      .is_none());
    assert!(cache.lookup(&key).is_some());
  }

  #[test]
  fn take_result_moves_ownership() {
    let mut cache: MeasureCache<String> = MeasureCache::new();
    let key = constraints(0.0, 10.0, 0.0, 10.0);
    let index = cache.record(&key, 5.0, 5.0, f32::NAN, Some("shaped".to_string()));
    assert_eq!(cache.take_result(index).as_deref(), Some("shaped"));
    assert!(cache.take_result(index).is_none());
  }
}
