//! Generic (naive loop-based) backend implementation.

use crate::backend::ReduceBackend;
use crate::element::Element;
use crate::strides::{cartesian_to_linear, linear_to_cartesian_into};
use crate::tensor::Tensor;

/// Generic backend using naive loop-based implementations.
///
/// Always available and serves as the reference implementation; suitable for
/// small tensors and debugging.
pub struct GenericBackend;

impl ReduceBackend for GenericBackend {
    fn sum_into<T: Element>(dest: &mut Tensor<T>, src: &Tensor<T>, axes: &[usize]) {
        debug_assert_eq!(dest.ndim(), src.ndim());
        debug_assert!(axes.iter().all(|&a| dest.shape()[a] == 1));

        // Copy strides to avoid a borrow conflict with data_mut().
        let dest_strides: Vec<usize> = dest.strides().to_vec();
        let dest_data = dest.data_mut();

        let mut idx = vec![0usize; src.ndim()];
        for (linear, &v) in src.data().iter().enumerate() {
            linear_to_cartesian_into(linear, src.shape(), &mut idx);
            // Collapse the reduced coordinates onto the size-1 output dims.
            for &axis in axes {
                idx[axis] = 0;
            }
            let out = cartesian_to_linear(&idx, &dest_strides);
            dest_data[out] = dest_data[out] + v;
        }
    }

    fn max_abs<T: Element>(src: &Tensor<T>) -> T {
        src.data()
            .iter()
            .fold(T::zero(), |acc, &v| acc.max(v.abs()))
    }
}
