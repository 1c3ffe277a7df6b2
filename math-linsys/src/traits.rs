//! Scalar abstraction for the dense solver
//!
//! [`RealField`] collects the arithmetic the elimination kernels need so that
//! the oracle and the solver can be written once for `f64` and `f32`.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types that can be used in the solver.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, used by the text front-end)
/// - `f32` (for memory-constrained callers)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static
{
    /// Convert a tolerance given in `f64` into this scalar type
    fn from_tolerance(tol: f64) -> Self;

    /// Lossy conversion used for diagnostics and error payloads
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Check if the magnitude of this value is strictly below `tol`
    fn is_below(self, tol: Self) -> bool {
        self.abs() < tol
    }
}

impl RealField for f64 {
    #[inline]
    fn from_tolerance(tol: f64) -> Self {
        tol
    }
}

impl RealField for f32 {
    #[inline]
    fn from_tolerance(tol: f64) -> Self {
        tol as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_f64_field() {
        let x: f64 = -3.0;
        assert!(!x.is_below(3.0));
        assert!(x.is_below(3.5));
        assert_relative_eq!(f64::from_tolerance(1e-10), 1e-10);
        assert_relative_eq!(x.to_f64_lossy(), -3.0);
    }

    #[test]
    fn test_f32_field() {
        let x: f32 = 2.5e-11;
        assert!(x.is_below(f32::from_tolerance(1e-10)));
        assert_relative_eq!(f32::from_tolerance(0.25), 0.25_f32);
    }

    #[test]
    fn test_nan_is_never_below() {
        assert!(!f64::NAN.is_below(1e-10));
    }
}
