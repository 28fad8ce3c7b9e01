//! Rank-preserving broadcast combination.

use crate::element::Element;
use crate::error::TensorError;
use crate::strides::linear_to_cartesian_into;
use crate::tensor::Tensor;

/// Combine `lhs` element-wise with a same-rank `rhs` whose dimensions are
/// each either equal to `lhs`'s or 1; size-1 `rhs` dimensions broadcast
/// across the corresponding `lhs` axis.
///
/// This is exactly the shape relationship between a tensor and its
/// keepdims-reduced norm, which is what the guarded division in
/// [`normalize_and_return_norm`](crate::operations::normalize_and_return_norm)
/// needs.
///
/// # Errors
///
/// Returns [`TensorError::BroadcastMismatch`] if the ranks differ or an
/// `rhs` dimension is neither 1 nor equal to the `lhs` dimension.
///
/// # Example
///
/// ```
/// use ndnorm::Tensor;
/// use ndnorm::operations::zip_broadcast;
///
/// // 2x2 divided by a per-row divisor of shape 2x1.
/// let x = Tensor::from_vec(vec![2.0, 30.0, 4.0, 60.0], &[2, 2]).unwrap();
/// let d = Tensor::from_vec(vec![2.0, 10.0], &[2, 1]).unwrap();
/// let y = zip_broadcast(&x, &d, |a, b| a / b).unwrap();
/// assert_eq!(y.data(), &[1.0, 3.0, 2.0, 6.0]);
/// ```
pub fn zip_broadcast<T: Element, F>(
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
    f: F,
) -> Result<Tensor<T>, TensorError>
where
    F: Fn(T, T) -> T,
{
    let compatible = rhs.ndim() == lhs.ndim()
        && rhs
            .shape()
            .iter()
            .zip(lhs.shape())
            .all(|(&r, &l)| r == 1 || r == l);
    if !compatible {
        return Err(TensorError::BroadcastMismatch {
            expected: lhs.shape().to_vec(),
            actual: rhs.shape().to_vec(),
        });
    }

    let mut idx = vec![0usize; lhs.ndim()];
    let mut data = Vec::with_capacity(lhs.len());
    for (linear, &v) in lhs.data().iter().enumerate() {
        linear_to_cartesian_into(linear, lhs.shape(), &mut idx);
        let rhs_linear: usize = idx
            .iter()
            .zip(rhs.shape())
            .zip(rhs.strides())
            .map(|((&i, &dim), &stride)| if dim == 1 { 0 } else { i * stride })
            .sum();
        data.push(f(v, rhs.data()[rhs_linear]));
    }
    Ok(Tensor::from_vec(data, lhs.shape()).expect("zip_broadcast: shape unchanged"))
}
