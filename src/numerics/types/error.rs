// src/numerics/types/error.rs

/// Errors returned by the checked (non-panicking) numerics operations.
///
/// The operator forms treat these conditions as caller defects and panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    #[error("Division by zero: divisor {divisor} is zero")]
    DivisionByZero { divisor: &'static str },

    #[error("Cannot normalize a zero-length vector")]
    ZeroLength,

    #[error("Invalid tolerance: epsilon must be non-negative")]
    NegativeTolerance,
}
