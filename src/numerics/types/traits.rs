// src/numerics/types/traits.rs
// FloatingPoint element trait shared by every numerics type.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// FloatingPoint is the element type bound used by the numerics types.
///
/// Note: `ZERO` and `ONE` are associated constants rather than functions so that
/// `Vector::ZERO` and the axis vectors can be compile-time constants.
pub trait FloatingPoint:
Copy + PartialOrd + Debug
+ Neg<Output = Self>
+ Add<Output = Self>
+ Sub<Output = Self>
+ Mul<Output = Self>
+ Div<Output = Self>
+ AddAssign
+ SubAssign
+ MulAssign
+ DivAssign
{
    const ZERO: Self;
    const ONE: Self;

    /// Tolerance used when the caller does not supply one (plane classification).
    const DEFAULT_EPSILON: Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn is_nan(self) -> bool;
}

impl FloatingPoint for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const DEFAULT_EPSILON: Self = 1e-5;

    fn abs(self) -> Self { f32::abs(self) }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn is_nan(self) -> bool { f32::is_nan(self) }
}

impl FloatingPoint for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const DEFAULT_EPSILON: Self = 1e-10;

    fn abs(self) -> Self { f64::abs(self) }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn is_nan(self) -> bool { f64::is_nan(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hypot<T: FloatingPoint>(a: T, b: T) -> T {
        (a * a + b * b).sqrt()
    }

    #[test]
    fn test_generic_sqrt_and_abs() {
        assert_eq!(hypot(3.0f32, 4.0f32), 5.0);
        assert_eq!(hypot(3.0f64, 4.0f64), 5.0);
        assert_eq!(FloatingPoint::abs(-2.5f32), 2.5);
        assert_eq!(FloatingPoint::abs(-2.5f64), 2.5);
        assert!(FloatingPoint::is_nan(f32::NAN));
        assert!(!FloatingPoint::is_nan(1.0f64));
    }

    #[test]
    fn test_constants() {
        assert_eq!(<f32 as FloatingPoint>::ZERO, 0.0);
        assert_eq!(<f64 as FloatingPoint>::ONE, 1.0);
        assert!(<f32 as FloatingPoint>::DEFAULT_EPSILON > 0.0);
        assert!(<f64 as FloatingPoint>::DEFAULT_EPSILON > 0.0);
    }
}
