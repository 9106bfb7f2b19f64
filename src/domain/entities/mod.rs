//! # Domain Entities
//!
//! Catalogue records with stable identity.
//!
//! - [`Product`]: an item that can be stocked
//! - [`Lot`]: a batch of units of one product

pub mod lot;
pub mod product;

pub use lot::{Lot, LotBuilder};
pub use product::{Product, ProductBuilder};
