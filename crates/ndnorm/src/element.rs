//! Element trait for tensor element types.

use num_traits::Float;
use std::fmt::Debug;

/// Trait for scalar types supported by ndnorm.
///
/// This trait wraps `num_traits::Float` with additional bounds required for
/// tensor operations, plus the smallest-positive-normal query used by the
/// stability guards.
///
/// Only real floating-point types implement `Element`; integer and complex
/// element types are rejected at compile time.
pub trait Element: Float + Debug + 'static {
    /// The smallest positive normal value of the type
    /// (`f64::MIN_POSITIVE` for `f64`).
    ///
    /// Never zero, which makes it a safe floor for divisors.
    fn tiny() -> Self {
        Self::min_positive_value()
    }
}

impl Element for f32 {}

impl Element for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_f64() {
        assert_eq!(f64::tiny(), f64::MIN_POSITIVE);
        assert!(f64::tiny() > 0.0);
    }

    #[test]
    fn test_tiny_f32() {
        assert_eq!(f32::tiny(), f32::MIN_POSITIVE);
        assert!(f32::tiny() > 0.0);
    }

    #[test]
    fn test_tiny_square_underflows() {
        // The near-zero-norm guard relies on tiny() being small enough that
        // the square of any norm below sqrt(tiny) compares <= tiny.
        let t = f64::tiny();
        assert!(t.sqrt() * t.sqrt() <= t * 2.0);
        assert!((t * 1e-10) * (t * 1e-10) <= t);
    }
}
