//! ndnorm - numerically stable L2-norm primitives for n-dimensional tensors.
//!
//! Computing an L2-norm as `sqrt(sum(x * x))` overflows once elements
//! approach the representable maximum, and dividing by a near-zero norm
//! turns normalization into amplified noise. This crate computes the norm as
//! `a * sqrt(sum((x / a)^2))` with `a` the largest magnitude (floored at the
//! smallest positive normal value), and guards the normalization division so
//! that slices with a numerically-zero norm pass through unchanged.
//!
//! # Architecture
//!
//! ```text
//! Level 1: High-level API (operations module)
//!     → norm, normalize_and_return_norm, normalize, sum_over
//!
//! Level 2: In-place API
//!     → sum_into
//!
//! Level 3: Backend kernels (backend module)
//!     → GenericBackend (naive loops)
//!     → Future: SIMD / parallel backends
//! ```
//!
//! # Example
//!
//! ```
//! use ndnorm::{norm, normalize, AxisSpec, Tensor};
//!
//! let x = Tensor::from_vec(vec![3.0_f64, 4.0], &[2]).unwrap();
//!
//! let n = norm(&x, AxisSpec::All, false).unwrap();
//! assert!((n.data()[0] - 5.0).abs() < 1e-12);
//!
//! let y = normalize(&x, AxisSpec::All).unwrap();
//! assert!((y.data()[0] - 0.6).abs() < 1e-12);
//! assert!((y.data()[1] - 0.8).abs() < 1e-12);
//! ```

pub mod axes;
pub mod backend;
pub mod element;
pub mod error;
pub mod operations;
pub mod strides;
pub mod tensor;

pub use axes::AxisSpec;
pub use element::Element;
pub use error::TensorError;
pub use operations::{norm, normalize, normalize_and_return_norm};
pub use tensor::Tensor;
