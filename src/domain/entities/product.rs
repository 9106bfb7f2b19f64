//! # Product Entity
//!
//! A catalogue item that can be stocked in lots.
//!
//! # Examples
//!
//! ```
//! use mercadofacil::domain::entities::Product;
//! use mercadofacil::domain::value_objects::{Price, ProductId};
//!
//! let mut product = Product::builder(ProductId::new(3))
//!     .name("cafeteira")
//!     .barcode("91662593")
//!     .manufacturer("extra rap")
//!     .price(Price::new(60.0).unwrap())
//!     .build();
//!
//! product.set_name("máquina de café expresso");
//! assert_eq!(product.name(), "máquina de café expresso");
//! ```

use crate::domain::value_objects::{Price, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A product in the catalogue.
///
/// Identity is [`ProductId`]; every other field is freely mutable through
/// the setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    id: ProductId,
    /// Display name.
    name: String,
    /// Barcode as printed on the packaging.
    barcode: String,
    /// Manufacturer name.
    manufacturer: String,
    /// Unit price.
    price: Price,
}

impl Product {
    /// Creates a product from all of its fields.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        barcode: impl Into<String>,
        manufacturer: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            barcode: barcode.into(),
            manufacturer: manufacturer.into(),
            price,
        }
    }

    /// Returns a builder for a product with the given identifier.
    #[must_use]
    pub fn builder(id: ProductId) -> ProductBuilder {
        ProductBuilder::new(id)
    }

    /// Returns the product ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the barcode.
    #[inline]
    #[must_use]
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// Returns the manufacturer.
    #[inline]
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Returns the unit price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Renames the product.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the barcode.
    pub fn set_barcode(&mut self, barcode: impl Into<String>) {
        self.barcode = barcode.into();
    }

    /// Replaces the manufacturer.
    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) {
        self.manufacturer = manufacturer.into();
    }

    /// Replaces the unit price.
    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product({} {} @ {})", self.id, self.name, self.price)
    }
}

/// Builder for constructing [`Product`] instances.
///
/// Unset text fields are empty and an unset price is zero.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    id: ProductId,
    name: String,
    barcode: String,
    manufacturer: String,
    price: Price,
}

impl ProductBuilder {
    /// Creates a new builder for the given identifier.
    #[must_use]
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: String::new(),
            barcode: String::new(),
            manufacturer: String::new(),
            price: Price::zero(),
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the barcode.
    #[must_use]
    pub fn barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = barcode.into();
        self
    }

    /// Sets the manufacturer.
    #[must_use]
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    /// Sets the unit price.
    #[must_use]
    pub fn price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    /// Builds the product.
    #[must_use]
    pub fn build(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            barcode: self.barcode,
            manufacturer: self.manufacturer,
            price: self.price,
        }
    }
}
