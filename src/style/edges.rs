//! Edge-indexed style values
//!
//! Margins, positions, padding, and borders are all specified per edge, with
//! CSS-style shorthands: a value on `Horizontal` covers `Left` and `Right`
//! unless a side-specific value is present, and `All` covers everything. The
//! writing-direction-aware `Start`/`End` edges deliberately do not cascade to
//! a physical side here; callers resolve them against the current direction
//! first (see [`crate::layout::axis`]).

use crate::style::dimension::Dimension;

/// Edge index for per-edge style values
///
/// The order matches the CSS shorthand cascade: side-specific edges first,
/// then the direction-aware pair, then the axis shorthands, then `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
  Left = 0,
  Top = 1,
  Right = 2,
  Bottom = 3,
  Start = 4,
  End = 5,
  Horizontal = 6,
  Vertical = 7,
  All = 8,
}

/// Number of addressable edges
pub const EDGE_COUNT: usize = 9;

/// One dimension per edge, with shorthand cascade on lookup
///
/// # Examples
///
/// ```
/// use flexlayout::style::{Dimension, Edge, EdgeValues};
///
/// let mut margin = EdgeValues::default();
/// margin.set(Edge::Horizontal, Dimension::points(8.0));
/// margin.set(Edge::Left, Dimension::points(2.0));
///
/// // The side-specific value wins over the axis shorthand.
/// assert_eq!(margin.computed(Edge::Left).resolve(0.0), 2.0);
/// assert_eq!(margin.computed(Edge::Right).resolve(0.0), 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeValues {
  values: [Dimension; EDGE_COUNT],
}

impl EdgeValues {
  /// Creates edge values with every edge undefined
  pub const fn undefined() -> Self {
    Self {
      values: [Dimension::UNDEFINED; EDGE_COUNT],
    }
  }

  /// Creates edge values with the same dimension on every edge
  pub fn all(value: Dimension) -> Self {
    let mut values = Self::undefined();
    values.set(Edge::All, value);
    values
  }

  /// Sets the dimension stored for an edge
  pub fn set(&mut self, edge: Edge, value: Dimension) {
    self.values[edge as usize] = value;
  }

  /// Returns the dimension stored for an edge, without cascade
  pub fn get(&self, edge: Edge) -> Dimension {
    self.values[edge as usize]
  }

  /// Returns the effective dimension for an edge after shorthand cascade
  ///
  /// Precedence: the explicit side, then the axis shorthand
  /// (`Horizontal`/`Vertical`), then `All`. `Start` and `End` never fall
  /// through to a physical side; absent values come back undefined so the
  /// caller can apply a direction-aware fallback.
  pub fn computed(&self, edge: Edge) -> Dimension {
    let direct = self.get(edge);
    if !direct.is_undefined() {
      return direct;
    }
    let axis = match edge {
      Edge::Left | Edge::Right => Some(self.get(Edge::Horizontal)),
      Edge::Top | Edge::Bottom => Some(self.get(Edge::Vertical)),
      Edge::Start | Edge::End => None,
      Edge::Horizontal | Edge::Vertical | Edge::All => None,
    };
    if let Some(axis) = axis {
      if !axis.is_undefined() {
        return axis;
      }
    }
    if matches!(edge, Edge::Start | Edge::End) {
      return Dimension::UNDEFINED;
    }
    self.get(Edge::All)
  }
}

impl Default for EdgeValues {
  fn default() -> Self {
    Self::undefined()
  }
}
