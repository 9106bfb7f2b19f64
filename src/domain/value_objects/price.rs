//! # Price Value Object
//!
//! Decimal price backed by [`rust_decimal::Decimal`].
//!
//! Prices carry no sign or range rules; entity field validation happens
//! outside this crate.

use crate::domain::value_objects::arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit price.
///
/// # Examples
///
/// ```
/// use mercadofacil::domain::value_objects::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::from_decimal(Decimal::new(6000, 2));
/// assert!(price.is_positive());
/// assert_eq!(price.to_string(), "60.00");
///
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a floating point value.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::InvalidValue` if `value` is NaN, infinite,
    /// or outside the decimal range.
    pub fn new(value: f64) -> ArithmeticResult<Self> {
        Decimal::from_f64(value)
            .map(Self)
            .ok_or(ArithmeticError::InvalidValue("price must be a finite number"))
    }

    /// Creates a price from a decimal.
    #[inline]
    #[must_use]
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Zero price.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is strictly greater than zero.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl CheckedArithmetic for Price {
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_add(rhs.0).map(Self)
    }

    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_mul(rhs.0).map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
