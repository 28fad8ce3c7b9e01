//! Tests for the stable norm and normalization operations, covering:
//! - equivalence to the naive norm at moderate magnitudes
//! - overflow avoidance near the representable maximum (f64 and f32)
//! - zero-input stability for every axis configuration
//! - the shape contract (keepdims, rank changes, normalize shape)
//! - idempotence on unit vectors
//! - exact pass-through for near-zero norms
//! - axis validation error paths

use approx::assert_relative_eq;
use ndnorm::operations::normalize_and_return_norm;
use ndnorm::{norm, normalize, AxisSpec, Tensor, TensorError};

/// Deterministic moderate-magnitude test tensor of the given shape.
fn sample_tensor(shape: &[usize]) -> Tensor<f64> {
    let len = shape.iter().product::<usize>();
    let data: Vec<f64> = (0..len)
        .map(|i| ((i * 7 + 3) % 11) as f64 * 0.5 - 2.0)
        .collect();
    Tensor::from_vec(data, shape).unwrap()
}

/// Naive sqrt-of-sum-of-squares along one axis of a rank-2 tensor.
fn naive_norm_rank2(x: &Tensor<f64>, axis: usize) -> Vec<f64> {
    let (rows, cols) = (x.shape()[0], x.shape()[1]);
    let (kept, reduced) = if axis == 0 { (cols, rows) } else { (rows, cols) };
    (0..kept)
        .map(|k| {
            let mut sum = 0.0;
            for r in 0..reduced {
                let idx = if axis == 0 { [r, k] } else { [k, r] };
                let v = *x.get(&idx).unwrap();
                sum += v * v;
            }
            sum.sqrt()
        })
        .collect()
}

#[test]
fn test_equivalence_to_naive_norm() {
    let x = sample_tensor(&[4, 5]);

    for axis in [0usize, 1] {
        let expected = naive_norm_rank2(&x, axis);
        let n = norm(&x, axis as isize, false).unwrap();
        assert_eq!(n.shape(), &[x.shape()[1 - axis]]);
        for (k, &e) in expected.iter().enumerate() {
            assert_relative_eq!(*n.get(&[k]).unwrap(), e, max_relative = 1e-14);
        }
    }

    let naive_all = x.data().iter().map(|v| v * v).sum::<f64>().sqrt();
    let n = norm(&x, AxisSpec::All, false).unwrap();
    assert_relative_eq!(n.data()[0], naive_all, max_relative = 1e-14);
}

#[test]
fn test_overflow_avoidance_f64() {
    // 3e300^2 overflows f64, but the true norm 5e300 is representable.
    let x = Tensor::from_vec(vec![3.0e300, 4.0e300], &[2]).unwrap();
    let naive = x.data().iter().map(|v| v * v).sum::<f64>();
    assert!(naive.is_infinite());

    let n = norm(&x, AxisSpec::All, false).unwrap();
    assert!(n.data()[0].is_finite());
    assert_relative_eq!(n.data()[0], 5.0e300, max_relative = 1e-14);
}

#[test]
fn test_overflow_avoidance_f32() {
    let x = Tensor::from_vec(vec![3.0e25f32, 4.0e25], &[2]).unwrap();
    assert!(!(3.0e25f32 * 3.0e25).is_finite());

    let n = norm(&x, AxisSpec::All, false).unwrap();
    assert!(n.data()[0].is_finite());
    assert_relative_eq!(n.data()[0], 5.0e25f32, max_relative = 1e-6);
}

#[test]
fn test_zero_input_stability() {
    let x: Tensor<f64> = Tensor::zeros(&[2, 3]);

    let configs = [
        AxisSpec::All,
        AxisSpec::Single(0),
        AxisSpec::Single(1),
        AxisSpec::axes([0, 1]),
    ];
    for axis in &configs {
        for keepdims in [false, true] {
            let n = norm(&x, axis.clone(), keepdims).unwrap();
            assert!(n.data().iter().all(|&v| v == 0.0), "axis {axis:?}");
        }
        let y = normalize(&x, axis.clone()).unwrap();
        assert_eq!(y, x, "axis {axis:?}");
    }
}

#[test]
fn test_shape_contract() {
    let x = sample_tensor(&[2, 3, 4]);

    let n = norm(&x, 1, false).unwrap();
    assert_eq!(n.shape(), &[2, 4]);

    let n = norm(&x, 1, true).unwrap();
    assert_eq!(n.shape(), &[2, 1, 4]);

    let n = norm(&x, AxisSpec::axes([0, 2]), false).unwrap();
    assert_eq!(n.shape(), &[3]);

    let n = norm(&x, AxisSpec::axes([0, 2]), true).unwrap();
    assert_eq!(n.shape(), &[1, 3, 1]);

    let n = norm(&x, AxisSpec::All, true).unwrap();
    assert_eq!(n.shape(), &[1, 1, 1]);

    let y = normalize(&x, 1).unwrap();
    assert_eq!(y.shape(), x.shape());

    let (y, n) = normalize_and_return_norm(&x, -1, false).unwrap();
    assert_eq!(y.shape(), &[2, 3, 4]);
    assert_eq!(n.shape(), &[2, 3]);
}

#[test]
fn test_multi_axis_matches_flat_slice() {
    // Reducing a rank-2 tensor over both axes equals flattening it first.
    let x = sample_tensor(&[3, 4]);
    let flat = x.clone().into_shape(&[12]).unwrap();

    let n_multi = norm(&x, AxisSpec::axes([0, 1]), false).unwrap();
    let n_flat = norm(&flat, 0, false).unwrap();
    assert_relative_eq!(n_multi.data()[0], n_flat.data()[0], max_relative = 1e-15);
}

#[test]
fn test_unit_vector_idempotence() {
    let x = Tensor::from_vec(vec![0.6, 0.8], &[2]).unwrap();
    let y = normalize(&x, AxisSpec::All).unwrap();
    assert_relative_eq!(y.data()[0], 0.6, epsilon = 1e-15);
    assert_relative_eq!(y.data()[1], 0.8, epsilon = 1e-15);

    // normalize(normalize(x)) == normalize(x)
    let x = sample_tensor(&[5]);
    let y1 = normalize(&x, AxisSpec::All).unwrap();
    let y2 = normalize(&y1, AxisSpec::All).unwrap();
    for (&a, &b) in y1.data().iter().zip(y2.data()) {
        assert_relative_eq!(a, b, epsilon = 1e-15);
    }
}

#[test]
fn test_near_zero_norm_passthrough() {
    // Norm is ~1.4e-200, far above zero but its square underflows below
    // tiny, so the slice must be returned bit-for-bit unchanged rather than
    // divided into noise (and must not produce NaN/Inf as a true division
    // by zero would).
    let x = Tensor::from_vec(vec![1.0e-200, 1.0e-200], &[2]).unwrap();
    let (y, n) = normalize_and_return_norm(&x, AxisSpec::All, false).unwrap();

    assert!(n.data()[0] > 0.0);
    assert!(n.data()[0] * n.data()[0] <= f64::MIN_POSITIVE);
    assert_eq!(y, x);
    assert!(y.data().iter().all(|v| v.is_finite()));
}

#[test]
fn test_concrete_vector_scenario() {
    let x = Tensor::from_vec(vec![3.0, 4.0], &[2]).unwrap();

    let n = norm(&x, AxisSpec::All, false).unwrap();
    assert_eq!(n.shape(), &[] as &[usize]);
    assert_relative_eq!(n.data()[0], 5.0, epsilon = 1e-12);

    let y = normalize(&x, AxisSpec::All).unwrap();
    assert_relative_eq!(y.data()[0], 0.6, epsilon = 1e-12);
    assert_relative_eq!(y.data()[1], 0.8, epsilon = 1e-12);

    let (y, n) = normalize_and_return_norm(&x, AxisSpec::All, false).unwrap();
    assert_relative_eq!(y.data()[0], 0.6, epsilon = 1e-12);
    assert_relative_eq!(y.data()[1], 0.8, epsilon = 1e-12);
    assert_eq!(n.ndim(), 0);
    assert_relative_eq!(n.data()[0], 5.0, epsilon = 1e-12);
}

#[test]
fn test_concrete_rank2_scenario() {
    // Rows [3, 4] and [0, 0] in column-major layout.
    let x = Tensor::from_vec(vec![3.0, 0.0, 4.0, 0.0], &[2, 2]).unwrap();

    let n = norm(&x, 1, false).unwrap();
    assert_eq!(n.shape(), &[2]);
    assert_relative_eq!(*n.get(&[0]).unwrap(), 5.0, epsilon = 1e-12);
    assert_eq!(*n.get(&[1]).unwrap(), 0.0);

    let y = normalize(&x, 1).unwrap();
    assert_relative_eq!(*y.get(&[0, 0]).unwrap(), 0.6, epsilon = 1e-12);
    assert_relative_eq!(*y.get(&[0, 1]).unwrap(), 0.8, epsilon = 1e-12);
    // Zero row passes through unchanged.
    assert_eq!(*y.get(&[1, 0]).unwrap(), 0.0);
    assert_eq!(*y.get(&[1, 1]).unwrap(), 0.0);
}

#[test]
fn test_keepdims_norm_broadcasts_back() {
    let x = sample_tensor(&[3, 4]);
    let (y, n) = normalize_and_return_norm(&x, 0, true).unwrap();
    assert_eq!(n.shape(), &[1, 4]);

    // y * n reconstructs x (no near-zero slices in the sample data).
    for i in 0..3 {
        for j in 0..4 {
            let back = y.get(&[i, j]).unwrap() * n.get(&[0, j]).unwrap();
            assert_relative_eq!(back, *x.get(&[i, j]).unwrap(), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_zero_size_shapes() {
    // An empty vector has norm 0, the same value the all-zero edge case
    // produces: there is nothing to accumulate.
    let x: Tensor<f64> = Tensor::zeros(&[0]);
    let n = norm(&x, AxisSpec::All, false).unwrap();
    assert_eq!(n.ndim(), 0);
    assert_eq!(n.data(), &[0.0]);

    let y = normalize(&x, AxisSpec::All).unwrap();
    assert_eq!(y, x);

    let x: Tensor<f64> = Tensor::zeros(&[0, 2]);

    let n = norm(&x, AxisSpec::All, false).unwrap();
    assert_eq!(n.data(), &[0.0]);

    // Reducing over the zero-length axis: two empty slices, each of norm 0.
    let n = norm(&x, 0, false).unwrap();
    assert_eq!(n.shape(), &[2]);
    assert_eq!(n.data(), &[0.0, 0.0]);

    // Reducing over the full axis leaves a zero-size result.
    let n = norm(&x, 1, false).unwrap();
    assert_eq!(n.shape(), &[0]);
    assert!(n.is_empty());

    let (y, n) = normalize_and_return_norm(&x, 0, false).unwrap();
    assert_eq!(y.shape(), &[0, 2]);
    assert!(y.is_empty());
    assert_eq!(n.shape(), &[2]);
    assert_eq!(n.data(), &[0.0, 0.0]);

    let (y, n) = normalize_and_return_norm(&x, 0, true).unwrap();
    assert_eq!(y.shape(), &[0, 2]);
    assert_eq!(n.shape(), &[1, 2]);

    let y = normalize(&x, 1).unwrap();
    assert_eq!(y, x);
}

#[test]
fn test_axis_validation_errors() {
    let x: Tensor<f64> = Tensor::zeros(&[2, 3]);

    assert!(matches!(
        norm(&x, 2, false),
        Err(TensorError::InvalidAxis { axis: 2, ndim: 2 })
    ));
    assert!(matches!(
        norm(&x, -3, false),
        Err(TensorError::InvalidAxis { axis: -3, ndim: 2 })
    ));
    assert!(matches!(
        normalize(&x, AxisSpec::axes([0, 0])),
        Err(TensorError::DuplicateAxis { axis: 0 })
    ));
    // A negative alias of an already-named axis is also a duplicate.
    assert!(matches!(
        normalize_and_return_norm(&x, AxisSpec::axes([1, -1]), false),
        Err(TensorError::DuplicateAxis { axis: -1 })
    ));
}

#[test]
fn test_inputs_are_not_mutated() {
    let x = sample_tensor(&[2, 3]);
    let copy = x.clone();
    let _ = norm(&x, AxisSpec::All, false).unwrap();
    let _ = normalize(&x, 0).unwrap();
    let _ = normalize_and_return_norm(&x, 1, true).unwrap();
    assert_eq!(x, copy);
}
