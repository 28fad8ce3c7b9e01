//! Axis-aware reduction operations.

use crate::backend::{GenericBackend, ReduceBackend};
use crate::element::Element;
use crate::error::TensorError;
use crate::tensor::Tensor;

/// Sum `tensor` over `axes`, optionally keeping the reduced axes as size-1
/// dimensions.
///
/// `axes` must be in-range, unique, and sorted ascending — the form produced
/// by [`AxisSpec::resolve`](crate::AxisSpec::resolve). An empty `axes` slice
/// reduces nothing and returns a copy.
///
/// # Errors
///
/// Returns [`TensorError::InvalidAxis`] for an out-of-range axis.
///
/// # Example
///
/// ```
/// use ndnorm::Tensor;
/// use ndnorm::operations::sum_over;
///
/// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// let s = sum_over(&t, &[0], false).unwrap();
/// assert_eq!(s.shape(), &[3]);
/// assert_eq!(s.data(), &[3.0, 7.0, 11.0]);
///
/// let s = sum_over(&t, &[0], true).unwrap();
/// assert_eq!(s.shape(), &[1, 3]);
/// ```
pub fn sum_over<T: Element>(
    tensor: &Tensor<T>,
    axes: &[usize],
    keepdims: bool,
) -> Result<Tensor<T>, TensorError> {
    for &axis in axes {
        if axis >= tensor.ndim() {
            return Err(TensorError::InvalidAxis {
                axis: axis as isize,
                ndim: tensor.ndim(),
            });
        }
    }
    debug_assert!(axes.windows(2).all(|w| w[0] < w[1]));

    let mut dest = Tensor::zeros(&keepdims_shape(tensor.shape(), axes));
    sum_into(&mut dest, tensor, axes);
    if keepdims {
        Ok(dest)
    } else {
        let dropped = dropped_shape(tensor.shape(), axes);
        Ok(dest
            .into_shape(&dropped)
            .expect("sum_over: reduced length unchanged"))
    }
}

/// Sum `src` over `axes` into a zero-initialized `dest` of keepdims shape.
pub fn sum_into<T: Element>(dest: &mut Tensor<T>, src: &Tensor<T>, axes: &[usize]) {
    GenericBackend::sum_into(dest, src, axes);
}

/// Maximum absolute value over all elements of the tensor.
///
/// Returns zero for an empty tensor.
pub fn max_abs<T: Element>(tensor: &Tensor<T>) -> T {
    GenericBackend::max_abs(tensor)
}

/// Shape with the reduced axes kept as size-1 dimensions.
pub(crate) fn keepdims_shape(shape: &[usize], axes: &[usize]) -> Vec<usize> {
    let mut kept = shape.to_vec();
    for &axis in axes {
        kept[axis] = 1;
    }
    kept
}

/// Shape with the reduced axes removed.
pub(crate) fn dropped_shape(shape: &[usize], axes: &[usize]) -> Vec<usize> {
    let mut dropped = Vec::with_capacity(shape.len() - axes.len());
    for (i, &dim) in shape.iter().enumerate() {
        if !axes.contains(&i) {
            dropped.push(dim);
        }
    }
    dropped
}
