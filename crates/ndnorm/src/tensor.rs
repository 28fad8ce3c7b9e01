//! Dense n-dimensional tensor type.
//!
//! Storage is a contiguous `Vec<T>` in column-major order; shape and strides
//! live alongside it. A rank-0 tensor (shape `[]`) holds exactly one
//! element; a tensor with a zero-length dimension holds none. Operations in
//! [`crate::operations`] never mutate their inputs and always allocate fresh
//! outputs.

use crate::element::Element;
use crate::error::TensorError;
use crate::strides::{cartesian_to_linear, compute_strides};

/// A dense n-dimensional tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T: Element> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor with the given shape, zero-initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnorm::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Create a tensor with every element set to `value`.
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        // The empty product gives a rank-0 (empty shape) tensor one element;
        // a zero-length dimension gives zero.
        let len = shape.iter().product::<usize>();
        Self {
            data: vec![value; len],
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Create a tensor from data and shape.
    ///
    /// Data is expected in column-major order.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the data length doesn't
    /// match the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndnorm::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(t.get(&[0, 0]), Some(&1.0));
    /// assert_eq!(t.get(&[1, 0]), Some(&2.0)); // column-major: [1,0] is second
    /// assert_eq!(t.get(&[0, 1]), Some(&3.0));
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, TensorError> {
        let expected = shape.iter().product::<usize>();
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        })
    }

    /// Get the shape of the tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the rank (number of dimensions).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get the total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get column-major strides.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Get the underlying data as a slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get the underlying data as a mutable slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get an element by linear index.
    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Get an element by cartesian indices.
    ///
    /// Returns `None` if indices are out of bounds or the wrong count.
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        if indices.len() != self.ndim() {
            return None;
        }
        for (&idx, &dim) in indices.iter().zip(&self.shape) {
            if idx >= dim {
                return None;
            }
        }
        self.data.get(cartesian_to_linear(indices, &self.strides))
    }

    /// Set an element by cartesian indices.
    ///
    /// # Errors
    ///
    /// Returns an error if indices are out of bounds or the wrong count.
    pub fn set(&mut self, indices: &[usize], value: T) -> Result<(), TensorError> {
        if indices.len() != self.ndim() {
            return Err(TensorError::WrongNumberOfIndices {
                expected: self.ndim(),
                actual: indices.len(),
            });
        }
        for (&idx, &dim) in indices.iter().zip(&self.shape) {
            if idx >= dim {
                return Err(TensorError::IndexOutOfBounds {
                    index: idx,
                    dim_size: dim,
                });
            }
        }
        let linear = cartesian_to_linear(indices, &self.strides);
        self.data[linear] = value;
        Ok(())
    }

    /// Fill all elements with a value.
    pub fn fill(&mut self, value: T) {
        for x in &mut self.data {
            *x = value;
        }
    }

    /// Reinterpret the tensor under a new shape of the same total length.
    ///
    /// Consumes the tensor; the data is not copied or reordered. Removing or
    /// adding size-1 axes is the common use, which preserves column-major
    /// element order.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the element counts differ.
    pub fn into_shape(self, new_shape: &[usize]) -> Result<Self, TensorError> {
        let expected = new_shape.iter().product::<usize>();
        if self.data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(Self {
            data: self.data,
            shape: new_shape.to_vec(),
            strides: compute_strides(new_shape),
        })
    }
}
