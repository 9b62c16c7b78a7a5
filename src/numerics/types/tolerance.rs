// src/numerics/types/tolerance.rs

use serde::{Deserialize, Serialize};

use super::error::NumericsError;
use super::traits::FloatingPoint;

/// Tolerances for approximate comparisons and plane classification.
///
/// Deserializable so callers can keep it in their own configuration files.
/// Deserialization goes through [`Tolerance::new`], so a negative or NaN epsilon
/// is rejected at load time. Missing fields fall back to `T::DEFAULT_EPSILON`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTolerance<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Tolerance<T: FloatingPoint = f32> {
    approximate: T,
    classification: T,
}

/// Unvalidated wire form of [`Tolerance`].
#[derive(Deserialize)]
#[serde(default)]
struct RawTolerance<T: FloatingPoint> {
    approximate: T,
    classification: T,
}

impl<T: FloatingPoint> Default for RawTolerance<T> {
    fn default() -> Self {
        Self {
            approximate: T::DEFAULT_EPSILON,
            classification: T::DEFAULT_EPSILON,
        }
    }
}

impl<T: FloatingPoint> TryFrom<RawTolerance<T>> for Tolerance<T> {
    type Error = NumericsError;

    fn try_from(raw: RawTolerance<T>) -> Result<Self, NumericsError> {
        Self::new(raw.approximate, raw.classification)
    }
}

impl<T: FloatingPoint> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            approximate: T::DEFAULT_EPSILON,
            classification: T::DEFAULT_EPSILON,
        }
    }
}

impl<T: FloatingPoint> Tolerance<T> {
    /// Validated constructor; both epsilons must be non-negative.
    pub fn new(approximate: T, classification: T) -> Result<Self, NumericsError> {
        if !(approximate >= T::ZERO && classification >= T::ZERO) {
            tracing::debug!(?approximate, ?classification, "rejecting negative tolerance");
            return Err(NumericsError::NegativeTolerance);
        }
        Ok(Self { approximate, classification })
    }

    /// Per-component epsilon for `is_approx_equal_with` checks
    pub fn approximate(&self) -> T {
        self.approximate
    }

    /// Half-width of the band around a plane that classifies as `Side::On`
    pub fn classification(&self) -> T {
        self.classification
    }
}
