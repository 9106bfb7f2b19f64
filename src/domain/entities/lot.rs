//! # Lot Entity
//!
//! A batch of stock for a single [`Product`].
//!
//! A lot owns its product by value. The product keeps its own identity, so
//! the same [`ProductId`](crate::domain::value_objects::ProductId) can
//! appear in many lots.
//!
//! # Examples
//!
//! ```
//! use mercadofacil::domain::entities::{Lot, Product};
//! use mercadofacil::domain::value_objects::{LotId, Price, ProductId};
//! use rust_decimal::Decimal;
//!
//! let product = Product::builder(ProductId::new(3))
//!     .name("cafeteira")
//!     .price(Price::from_decimal(Decimal::new(60, 0)))
//!     .build();
//! let lot = Lot::builder(LotId::new(3), product).item_count(5).build();
//!
//! assert_eq!(lot.total_value(), Some(Price::from_decimal(Decimal::new(300, 0))));
//! ```

use crate::domain::entities::product::Product;
use crate::domain::value_objects::{CheckedArithmetic, LotId, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stock lot of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    /// Unique identifier.
    id: LotId,
    /// Number of units in the lot.
    item_count: u32,
    /// The product stocked in this lot.
    product: Product,
}

impl Lot {
    /// Creates a lot from all of its fields.
    #[must_use]
    pub fn new(id: LotId, item_count: u32, product: Product) -> Self {
        Self {
            id,
            item_count,
            product,
        }
    }

    /// Returns a builder for a lot of `product`.
    #[must_use]
    pub fn builder(id: LotId, product: Product) -> LotBuilder {
        LotBuilder::new(id, product)
    }

    /// Returns the lot ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> LotId {
        self.id
    }

    /// Returns the number of units in the lot.
    #[inline]
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Returns the product stocked in this lot.
    #[inline]
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns a mutable reference to the product.
    #[inline]
    pub fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }

    /// Replaces the unit count.
    pub fn set_item_count(&mut self, item_count: u32) {
        self.item_count = item_count;
    }

    /// Replaces the product.
    pub fn set_product(&mut self, product: Product) {
        self.product = product;
    }

    /// Value of the whole lot at the product's unit price.
    ///
    /// Returns `price * item_count`, or `None` on overflow.
    #[must_use]
    pub fn total_value(&self) -> Option<Price> {
        let count = Price::from_decimal(Decimal::from(self.item_count));
        self.product.price().safe_mul(count).ok()
    }
}

impl fmt::Display for Lot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lot({} x{} of {})",
            self.id,
            self.item_count,
            self.product.name()
        )
    }
}

/// Builder for constructing [`Lot`] instances.
#[derive(Debug, Clone)]
pub struct LotBuilder {
    id: LotId,
    item_count: u32,
    product: Product,
}

impl LotBuilder {
    /// Creates a new builder with required fields. The item count starts at zero.
    #[must_use]
    pub fn new(id: LotId, product: Product) -> Self {
        Self {
            id,
            item_count: 0,
            product,
        }
    }

    /// Sets the unit count.
    #[must_use]
    pub fn item_count(mut self, item_count: u32) -> Self {
        self.item_count = item_count;
        self
    }

    /// Builds the lot.
    #[must_use]
    pub fn build(self) -> Lot {
        Lot {
            id: self.id,
            item_count: self.item_count,
            product: self.product,
        }
    }
}
