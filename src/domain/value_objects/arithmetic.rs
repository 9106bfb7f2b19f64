//! # Checked Arithmetic
//!
//! Overflow-safe arithmetic for monetary values.
//!
//! # Examples
//!
//! ```
//! use mercadofacil::domain::value_objects::arithmetic::{ArithmeticError, CheckedArithmetic};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(Decimal::new(6, 0).safe_mul(Decimal::new(7, 0)), Ok(Decimal::new(42, 0)));
//! assert_eq!(Decimal::MAX.safe_add(Decimal::ONE), Err(ArithmeticError::Overflow));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Value cannot be represented (NaN, infinite, out of range).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Implementors never panic; overflow is reported as
/// `Err(ArithmeticError::Overflow)`.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_correctly() {
        assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
        assert_eq!(
            ArithmeticError::InvalidValue("not finite").to_string(),
            "invalid value: not finite"
        );
    }

    #[test]
    fn safe_add_works() {
        let sum = Decimal::new(12536, 2).safe_add(Decimal::new(6000, 2)).unwrap();
        assert_eq!(sum, Decimal::new(18536, 2));
    }

    #[test]
    fn safe_mul_works() {
        let product = Decimal::new(6000, 2).safe_mul(Decimal::from(5u32)).unwrap();
        assert_eq!(product, Decimal::new(300, 0));
    }

    #[test]
    fn safe_mul_overflow_fails() {
        assert_eq!(
            Decimal::MAX.safe_mul(Decimal::TWO),
            Err(ArithmeticError::Overflow)
        );
    }
}
