//! Numerically stable L2-norm and normalization.
//!
//! The naive `sqrt(sum(x * x))` overflows once elements approach the
//! representable maximum (their squares do not fit the type even when the
//! norm itself does), and dividing by a near-zero norm amplifies
//! floating-point noise. Both failure modes are avoided here with one
//! rescaling trick: divide by the largest magnitude before squaring, and
//! multiply it back after the square root. Slices whose norm is numerically
//! indistinguishable from zero are deliberately left unnormalized.

use crate::axes::AxisSpec;
use crate::element::Element;
use crate::error::TensorError;
use crate::operations::{
    map, map_inplace, max_abs, select, squeeze, sum_over, zip_broadcast, zip_map,
};
use crate::tensor::Tensor;

/// Compute the L2-norm of `x` reduced over `axis`.
///
/// Equal in value to `sqrt(sum(x * x, axis))` but computed as
/// `a * sqrt(sum((x / a)^2, axis))` with `a = max(max(|x|), tiny)`, so no
/// intermediate square can overflow as long as the true norm is
/// representable. The `tiny` floor keeps `a` nonzero for an all-zero input,
/// for which the result is exactly zero.
///
/// With `AxisSpec::All` (or a rank-0 input) the result is a rank-0 tensor;
/// with `keepdims` the reduced axes are retained as size-1 dimensions so the
/// result broadcasts against `x`.
///
/// # Errors
///
/// Returns [`TensorError::InvalidAxis`] or [`TensorError::DuplicateAxis`]
/// for an axis specification that is not valid for `x`'s rank.
///
/// # Example
///
/// ```
/// use ndnorm::{AxisSpec, Tensor};
/// use ndnorm::operations::norm;
///
/// let x = Tensor::from_vec(vec![3.0_f64, 4.0], &[2]).unwrap();
/// let n = norm(&x, AxisSpec::All, false).unwrap();
/// assert_eq!(n.shape(), &[] as &[usize]);
/// assert!((n.data()[0] - 5.0).abs() < 1e-12);
///
/// // Elements this large would overflow the naive sum of squares.
/// let big = Tensor::from_vec(vec![3.0e300_f64, 4.0e300], &[2]).unwrap();
/// let n = norm(&big, AxisSpec::All, false).unwrap();
/// assert!((n.data()[0] - 5.0e300).abs() < 1e288);
/// ```
pub fn norm<T: Element>(
    x: &Tensor<T>,
    axis: impl Into<AxisSpec>,
    keepdims: bool,
) -> Result<Tensor<T>, TensorError> {
    let axes = axis.into().resolve(x.ndim())?;

    // Rescale so the largest magnitude becomes 1; squaring then cannot
    // overflow. The tiny() floor keeps `a` nonzero for an all-zero input.
    let a = max_abs(x).max(T::tiny());
    let b = map(x, |v| v / a);
    let squares = zip_map(&b, &b, |p, q| p * q)?;

    let mut n = sum_over(&squares, &axes, keepdims)?;
    map_inplace(&mut n, |v| a * v.sqrt());
    Ok(n)
}

/// Normalize `x` by its L2-norm along `axis` and return both the normalized
/// tensor and the norm.
///
/// The norm is computed with keepdims internally so it broadcasts against
/// `x` during the division. Wherever the squared norm is at or below
/// `tiny`, the divisor is replaced by 1 and that slice of `x` is returned
/// unnormalized: renormalizing a vector whose norm is numerically
/// indistinguishable from zero would only amplify noise. The returned norm
/// has the reduced axes removed unless `keepdims` is set; the normalized
/// tensor always has `x`'s shape.
///
/// # Example
///
/// ```
/// use ndnorm::Tensor;
/// use ndnorm::operations::normalize_and_return_norm;
///
/// // Rows [3, 4] and [0, 0], reduced along axis 1 (column-major layout).
/// let x = Tensor::from_vec(vec![3.0_f64, 0.0, 4.0, 0.0], &[2, 2]).unwrap();
/// let (y, n) = normalize_and_return_norm(&x, 1, false).unwrap();
/// assert_eq!(n.shape(), &[2]);
/// assert_eq!(n.data(), &[5.0, 0.0]);
/// // Row 0 normalized, zero row passed through unchanged.
/// assert_eq!(y.data(), &[0.6, 0.0, 0.8, 0.0]);
/// ```
pub fn normalize_and_return_norm<T: Element>(
    x: &Tensor<T>,
    axis: impl Into<AxisSpec>,
    keepdims: bool,
) -> Result<(Tensor<T>, Tensor<T>), TensorError> {
    let axis = axis.into();
    let n = norm(x, axis.clone(), true)?;

    // If n * n is at or below tiny, dividing by n would amplify noise and
    // destabilize derivatives; divide by 1 there instead.
    let divisor = select(&n, |v| v * v > T::tiny(), T::one());
    let y = zip_broadcast(x, &divisor, |num, den| num / den)?;

    let n = if keepdims {
        n
    } else {
        squeeze(&n, &axis.resolve(x.ndim())?)?
    };
    Ok((y, n))
}

/// Normalize `x` by its L2-norm along `axis`.
///
/// Convenience wrapper over [`normalize_and_return_norm`] that discards the
/// norm. The output always has `x`'s shape; slices with a near-zero norm
/// are returned unchanged.
///
/// # Example
///
/// ```
/// use ndnorm::{AxisSpec, Tensor};
/// use ndnorm::operations::normalize;
///
/// let x = Tensor::from_vec(vec![3.0_f64, 4.0], &[2]).unwrap();
/// let y = normalize(&x, AxisSpec::All).unwrap();
/// assert!((y.data()[0] - 0.6).abs() < 1e-12);
/// assert!((y.data()[1] - 0.8).abs() < 1e-12);
/// ```
pub fn normalize<T: Element>(
    x: &Tensor<T>,
    axis: impl Into<AxisSpec>,
) -> Result<Tensor<T>, TensorError> {
    // keepdims so the division broadcasts; the discarded norm's final shape
    // is irrelevant.
    let (y, _) = normalize_and_return_norm(x, axis, true)?;
    Ok(y)
}
