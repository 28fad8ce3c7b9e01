//! Tensor operations.
//!
//! Layered the same way throughout the crate:
//!
//! ```text
//! Level 1: High-level API (norm, normalize, sum_over)
//!     → allocate output
//!     → call in-place version
//!
//! Level 2: In-place API (sum_into)
//!     → dispatch to backend
//!
//! Level 3: Backend kernels (GenericBackend)
//! ```

mod broadcast;
mod elementwise;
mod norm;
mod reduce;
mod shape;

pub use broadcast::zip_broadcast;
pub use elementwise::{map, map_inplace, select, zip_map};
pub use norm::{norm, normalize, normalize_and_return_norm};
pub use reduce::{max_abs, sum_into, sum_over};
pub use shape::squeeze;
