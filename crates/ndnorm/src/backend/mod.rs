//! Backend abstraction for reduction kernels.
//!
//! High-level operations in [`crate::operations`] are written against the
//! [`ReduceBackend`] trait, so the naive loops can be replaced by a SIMD or
//! parallel backend without touching norm semantics.
//!
//! # Backends
//!
//! - [`GenericBackend`]: naive loop-based implementation (always available)

mod generic;

pub use generic::GenericBackend;

use crate::element::Element;
use crate::tensor::Tensor;

/// Reduction kernels an array backend must provide.
pub trait ReduceBackend {
    /// Accumulate sums of `src` over `axes` into `dest`.
    ///
    /// `dest` must be zero-initialized with `src`'s shape where each axis in
    /// `axes` is collapsed to size 1.
    fn sum_into<T: Element>(dest: &mut Tensor<T>, src: &Tensor<T>, axes: &[usize]);

    /// Maximum absolute value over all elements; zero for an empty tensor.
    fn max_abs<T: Element>(src: &Tensor<T>) -> T;
}
