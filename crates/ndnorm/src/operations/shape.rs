//! Shape operations.

use crate::element::Element;
use crate::error::TensorError;
use crate::tensor::Tensor;

/// Remove the named size-1 axes from the tensor.
///
/// Removing size-1 dimensions does not reorder column-major data, so the
/// result reuses the element order of the input.
///
/// # Errors
///
/// Returns [`TensorError::InvalidAxis`] for an out-of-range axis and
/// [`TensorError::SqueezeNonUnit`] if a named axis does not have size 1.
///
/// # Example
///
/// ```
/// use ndnorm::Tensor;
/// use ndnorm::operations::squeeze;
///
/// let t = Tensor::from_vec(vec![1.0, 2.0], &[2, 1]).unwrap();
/// let s = squeeze(&t, &[1]).unwrap();
/// assert_eq!(s.shape(), &[2]);
/// assert_eq!(s.data(), &[1.0, 2.0]);
/// ```
pub fn squeeze<T: Element>(tensor: &Tensor<T>, axes: &[usize]) -> Result<Tensor<T>, TensorError> {
    for &axis in axes {
        if axis >= tensor.ndim() {
            return Err(TensorError::InvalidAxis {
                axis: axis as isize,
                ndim: tensor.ndim(),
            });
        }
        let size = tensor.shape()[axis];
        if size != 1 {
            return Err(TensorError::SqueezeNonUnit { axis, size });
        }
    }

    let mut new_shape = Vec::with_capacity(tensor.ndim().saturating_sub(axes.len()));
    for (i, &dim) in tensor.shape().iter().enumerate() {
        if !axes.contains(&i) {
            new_shape.push(dim);
        }
    }
    tensor.clone().into_shape(&new_shape)
}
