//! Axis specification for reductions.
//!
//! Reductions accept either all axes (treating the tensor as one flat
//! vector), a single axis, or a set of axes. Negative indices count from the
//! last axis backward, so `-1` names the trailing axis.

use crate::error::TensorError;
use smallvec::SmallVec;

/// Resolved, validated axis indices in ascending order.
pub type ResolvedAxes = SmallVec<[usize; 8]>;

/// Axis or axes along which a reduction is performed.
///
/// # Example
///
/// ```
/// use ndnorm::AxisSpec;
///
/// assert_eq!(AxisSpec::All.resolve(3).unwrap().as_slice(), &[0, 1, 2]);
/// assert_eq!(AxisSpec::from(-1).resolve(3).unwrap().as_slice(), &[2]);
/// assert_eq!(AxisSpec::axes([2, 0]).resolve(3).unwrap().as_slice(), &[0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSpec {
    /// Reduce over every axis of the tensor.
    All,
    /// Reduce over one axis; negative counts from the last axis.
    Single(isize),
    /// Reduce over a set of axes; negative indices allowed.
    Multi(Vec<isize>),
}

impl AxisSpec {
    /// Build a multi-axis specification from an iterator of indices.
    pub fn axes<I>(axes: I) -> Self
    where
        I: IntoIterator<Item = isize>,
    {
        AxisSpec::Multi(axes.into_iter().collect())
    }

    /// Resolve the specification against a tensor of rank `ndim`.
    ///
    /// Negative indices are normalized, out-of-range indices are rejected
    /// with [`TensorError::InvalidAxis`], and an axis named twice (possibly
    /// once via its negative alias) is rejected with
    /// [`TensorError::DuplicateAxis`]. The result is sorted ascending.
    pub fn resolve(&self, ndim: usize) -> Result<ResolvedAxes, TensorError> {
        let raw: &[isize] = match self {
            AxisSpec::All => return Ok((0..ndim).collect()),
            AxisSpec::Single(axis) => std::slice::from_ref(axis),
            AxisSpec::Multi(axes) => axes,
        };

        let mut resolved = ResolvedAxes::new();
        for &axis in raw {
            let idx = if axis < 0 { axis + ndim as isize } else { axis };
            if idx < 0 || idx >= ndim as isize {
                return Err(TensorError::InvalidAxis { axis, ndim });
            }
            let idx = idx as usize;
            if resolved.contains(&idx) {
                return Err(TensorError::DuplicateAxis { axis });
            }
            resolved.push(idx);
        }
        resolved.sort_unstable();
        Ok(resolved)
    }
}

impl From<isize> for AxisSpec {
    fn from(axis: isize) -> Self {
        AxisSpec::Single(axis)
    }
}

impl From<i32> for AxisSpec {
    fn from(axis: i32) -> Self {
        AxisSpec::Single(axis as isize)
    }
}

impl From<Vec<isize>> for AxisSpec {
    fn from(axes: Vec<isize>) -> Self {
        AxisSpec::Multi(axes)
    }
}

impl From<&[isize]> for AxisSpec {
    fn from(axes: &[isize]) -> Self {
        AxisSpec::Multi(axes.to_vec())
    }
}

impl<const N: usize> From<[isize; N]> for AxisSpec {
    fn from(axes: [isize; N]) -> Self {
        AxisSpec::Multi(axes.to_vec())
    }
}
