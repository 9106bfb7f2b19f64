//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! ## Identity Types
//!
//! - [`ProductId`], [`LotId`]: numeric identifiers
//!
//! ## Numeric Types
//!
//! - [`Price`]: decimal price with checked arithmetic
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: error type for arithmetic failures
//! - [`CheckedArithmetic`]: trait for safe arithmetic operations

pub mod arithmetic;
pub mod ids;
pub mod price;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use ids::{LotId, ProductId};
pub use price::Price;
