//! Error types for ndnorm.

use thiserror::Error;

/// Errors that can occur in tensor operations.
#[derive(Debug, Error)]
pub enum TensorError {
    /// Shape mismatch between data length and expected size.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Wrong number of indices provided.
    #[error("wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Index out of bounds.
    #[error("index out of bounds: index {index} is out of range for dimension {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },

    /// Axis outside the valid range `[-ndim, ndim)`.
    #[error("invalid axis {axis} for tensor with {ndim} dimensions")]
    InvalidAxis { axis: isize, ndim: usize },

    /// The same axis named more than once (after negative-index
    /// normalization).
    #[error("duplicate axis {axis}")]
    DuplicateAxis { axis: isize },

    /// Squeeze of an axis whose size is not 1.
    #[error("cannot squeeze axis {axis} with size {size}")]
    SqueezeNonUnit { axis: usize, size: usize },

    /// Broadcast partner has a dimension that is neither 1 nor equal.
    #[error("cannot broadcast shape {actual:?} against {expected:?}")]
    BroadcastMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}
