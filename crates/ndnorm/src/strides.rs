//! Stride computation utilities.
//!
//! Uses column-major (Fortran) order: the first axis varies fastest in the
//! underlying storage.

/// Compute column-major strides from a shape.
///
/// For shape `[d0, d1, d2, ...]`, returns `[1, d0, d0*d1, ...]`.
///
/// # Examples
///
/// ```
/// use ndnorm::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![1, 3, 12]);
/// assert_eq!(compute_strides(&[2, 3]), vec![1, 2]);
/// assert_eq!(compute_strides(&[]), vec![]);
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = Vec::with_capacity(shape.len());
    let mut step = 1;
    for &dim in shape {
        strides.push(step);
        step *= dim;
    }
    strides
}

/// Convert cartesian indices to a linear index.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides)
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Decompose a linear index into cartesian indices, writing into `out`.
///
/// The buffer-reusing signature lets reduction loops convert one index per
/// element without a per-element allocation.
#[inline]
pub fn linear_to_cartesian_into(mut linear: usize, shape: &[usize], out: &mut [usize]) {
    debug_assert_eq!(shape.len(), out.len());
    for (idx, &dim) in out.iter_mut().zip(shape) {
        *idx = linear % dim;
        linear /= dim;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_strides() {
        assert_eq!(compute_strides(&[3, 4, 5]), vec![1, 3, 12]);
        assert_eq!(compute_strides(&[7]), vec![1]);
        assert_eq!(compute_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_cartesian_to_linear() {
        let strides = compute_strides(&[3, 4, 5]);
        assert_eq!(cartesian_to_linear(&[0, 0, 0], &strides), 0);
        assert_eq!(cartesian_to_linear(&[1, 0, 0], &strides), 1);
        assert_eq!(cartesian_to_linear(&[0, 1, 0], &strides), 3);
        assert_eq!(cartesian_to_linear(&[0, 0, 1], &strides), 12);
        assert_eq!(
            cartesian_to_linear(&[2, 3, 4], &strides),
            2 + 3 * 3 + 4 * 12
        );
    }

    #[test]
    fn test_roundtrip() {
        let shape = [3, 4, 5];
        let strides = compute_strides(&shape);
        let mut idx = [0usize; 3];
        for linear in 0..shape.iter().product::<usize>() {
            linear_to_cartesian_into(linear, &shape, &mut idx);
            assert_eq!(cartesian_to_linear(&idx, &strides), linear);
        }
    }

    #[test]
    fn test_rank0() {
        let mut idx: [usize; 0] = [];
        linear_to_cartesian_into(0, &[], &mut idx);
        assert_eq!(cartesian_to_linear(&idx, &[]), 0);
    }
}
