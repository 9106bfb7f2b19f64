//! # Identifiers
//!
//! Numeric identity types for catalogue entities.
//!
//! Identifiers are assigned by the caller, never by the store.
//!
//! # Examples
//!
//! ```
//! use mercadofacil::domain::value_objects::{LotId, ProductId};
//!
//! let lot = LotId::new(3);
//! assert_eq!(lot.get(), 3);
//! assert_eq!(lot.to_string(), "3");
//! assert_eq!(ProductId::from(7), ProductId::new(7));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its raw value.
            #[inline]
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            #[inline]
            #[must_use]
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a [`Product`](crate::domain::entities::Product).
    ProductId
);

numeric_id!(
    /// Identifier of a [`Lot`](crate::domain::entities::Lot).
    LotId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_ordered_by_value() {
        assert!(LotId::new(1) < LotId::new(2));
        assert!(ProductId::new(10) > ProductId::new(9));
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&LotId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: ProductId = serde_json::from_str("8").unwrap();
        assert_eq!(id, ProductId::new(8));
    }
}
