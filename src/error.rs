//! Error types for geodex operations.

use crate::types::Axis;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeodexError>;

/// Errors reported by geodex.
///
/// Searches and removals are total operations: a miss is reported through
/// `Option`/`bool` returns, never through this enum. The variants here cover
/// the conditions that would otherwise corrupt the table or abort the
/// process.
#[derive(Debug, Error)]
pub enum GeodexError {
    /// Malformed caller input: empty or mismatched training samples,
    /// inverted construction bounds, non-finite coordinates.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A computed bucket index fell outside `[0, capacity)` on a mutating
    /// path. The table is left unchanged.
    #[error("bucket index {index} is outside the table range 0..{capacity}")]
    IndexOutOfRange { index: i64, capacity: usize },

    /// Range-scan bounds where the minimum exceeds the maximum on an axis.
    #[error("invalid range: minimum {min} exceeds maximum {max} on the {axis} axis")]
    InvalidRange { axis: Axis, min: f64, max: f64 },

    /// A resize that cannot keep every entry inside the new prediction
    /// window. The table is left unchanged.
    #[error(
        "resize to window [{min_index}, {max_index}] would strand {stranded} entries; \
         retrain the model or widen the window"
    )]
    CapacityChangeUnsafe {
        min_index: i64,
        max_index: i64,
        stranded: usize,
    },
}
