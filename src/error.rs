//! Error types for the layout engine
//!
//! The engine itself is total over well-formed inputs: contract violations in
//! style data degrade to undefined contributions (NaN) and never abort a
//! layout. The only fallible interaction is the host's measurement callback;
//! when it signals failure the layout call is abandoned and the originating
//! cause is preserved on the returned error.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for layout operations
///
/// # Examples
///
/// ```
/// use flexlayout::Result;
///
/// fn run_layout() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by a host measurement callback
///
/// The core never inspects the error beyond chaining it as a source; hosts
/// may use any error type that fits.
pub type MeasureError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for layout calls
///
/// # Examples
///
/// ```
/// use flexlayout::Error;
///
/// let err = Error::InvalidStyle {
///     message: "point scale factor must be positive".to_string(),
/// };
/// assert!(err.to_string().contains("point scale factor"));
/// ```
#[derive(Error, Debug)]
pub enum Error {
  /// A host measurement callback signaled failure
  ///
  /// No partial layout output is produced; the callback's error is preserved
  /// as the source.
  #[error("measurement failed for child {child_index}")]
  Measurement {
    /// Index of the child whose callback failed
    child_index: usize,
    /// The host-signaled cause
    #[source]
    source: MeasureError,
  },

  /// A style input was malformed beyond what NaN absorption can handle
  #[error("invalid style: {message}")]
  InvalidStyle {
    /// Description of the violated contract
    message: String,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug)]
  struct HostFailure;

  impl std::fmt::Display for HostFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "text shaper unavailable")
    }
  }

  impl std::error::Error for HostFailure {}

  #[test]
  fn measurement_error_preserves_cause() {
    let err = Error::Measurement {
      child_index: 3,
      source: Box::new(HostFailure),
    };
    assert!(err.to_string().contains("child 3"));
    let source = std::error::Error::source(&err).expect("source");
    assert_eq!(source.to_string(), "text shaper unavailable");
  }
}
