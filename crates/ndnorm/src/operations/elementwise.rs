//! Element-wise tensor operations.

use crate::element::Element;
use crate::error::TensorError;
use crate::tensor::Tensor;

/// Apply a function to each element, returning a new tensor.
///
/// # Example
///
/// ```
/// use ndnorm::Tensor;
/// use ndnorm::operations::map;
///
/// let t = Tensor::from_vec(vec![1.0, 4.0, 9.0], &[3]).unwrap();
/// let r = map(&t, |x: f64| x.sqrt());
/// assert!((r.data()[2] - 3.0).abs() < 1e-12);
/// ```
pub fn map<T: Element, F>(tensor: &Tensor<T>, f: F) -> Tensor<T>
where
    F: Fn(T) -> T,
{
    let data: Vec<T> = tensor.data().iter().map(|&x| f(x)).collect();
    Tensor::from_vec(data, tensor.shape()).expect("map: shape unchanged")
}

/// Apply a function to each element in-place.
pub fn map_inplace<T: Element, F>(tensor: &mut Tensor<T>, f: F)
where
    F: Fn(T) -> T,
{
    for x in tensor.data_mut() {
        *x = f(*x);
    }
}

/// Combine two same-shape tensors element-wise with a binary function.
///
/// # Errors
///
/// Returns [`TensorError::ShapeMismatch`] if the shapes differ.
///
/// # Example
///
/// ```
/// use ndnorm::Tensor;
/// use ndnorm::operations::zip_map;
///
/// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
/// let b = Tensor::from_vec(vec![4.0, 5.0, 6.0], &[3]).unwrap();
/// let c = zip_map(&a, &b, |x, y| x + y).unwrap();
/// assert_eq!(c.data(), &[5.0, 7.0, 9.0]);
/// ```
pub fn zip_map<T: Element, F>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    f: F,
) -> Result<Tensor<T>, TensorError>
where
    F: Fn(T, T) -> T,
{
    if a.shape() != b.shape() {
        return Err(TensorError::ShapeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let data: Vec<T> = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(Tensor::from_vec(data, a.shape()).expect("zip_map: shape unchanged"))
}

/// Keep each element where `pred` holds, substituting `fallback` elsewhere.
///
/// This is the "safe divisor" idiom: `select(&n, |v| v * v > tiny, one)`
/// yields a divisor of 1 wherever `n` is too small to divide by.
///
/// # Example
///
/// ```
/// use ndnorm::Tensor;
/// use ndnorm::operations::select;
///
/// let t = Tensor::from_vec(vec![0.0, 2.0, 0.0], &[3]).unwrap();
/// let d = select(&t, |v| v > 1.0, 1.0);
/// assert_eq!(d.data(), &[1.0, 2.0, 1.0]);
/// ```
pub fn select<T: Element, P>(tensor: &Tensor<T>, pred: P, fallback: T) -> Tensor<T>
where
    P: Fn(T) -> bool,
{
    map(tensor, |x| if pred(x) { x } else { fallback })
}
