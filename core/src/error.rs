//! Errors reported by ranged traversal and the operation library.

use thiserror::Error;

/// Error raised synchronously by a sequence operation.
///
/// "Not found" is never an error: [`detect`](crate::iterate::detect) returns
/// `None` and [`detect_index`](crate::iterate::detect_index) returns `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IterateError {
    /// A range endpoint lies outside `[0, len - 1]`.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: isize, len: usize },

    /// `take`/`drop` was asked for a negative number of elements.
    #[error("count must be non-negative, got {0}")]
    NegativeCount(isize),

    /// `for_each_in_both` was given sequences of different lengths.
    #[error("cannot pair sequences of different lengths ({left} and {right})")]
    SizeMismatch { left: usize, right: usize },

    #[error("cannot copy {count} elements from a sequence of length {len}")]
    CountExceedsLength { count: usize, len: usize },

    #[error("target of length {available} cannot hold {required} elements")]
    TargetTooSmall { required: usize, available: usize },
}
