//! # MercadoFacil
//!
//! Volatile, keyed entity store for the MercadoFacil product catalogue.
//!
//! The crate stands in for a persistent database during development and
//! testing. It models two entities, [`Product`](domain::entities::Product)
//! and [`Lot`](domain::entities::Lot), and stores them in a
//! [`VolatileRepository`](infrastructure::persistence::in_memory::VolatileRepository)
//! that implements the [`Repository`](infrastructure::persistence::Repository)
//! port.
//!
//! ## Layers
//!
//! - [`domain`]: entities and value objects, no I/O
//! - [`infrastructure`]: persistence port and the in-memory backend
//! - [`config`]: settings loaded from the environment
//! - [`telemetry`]: tracing subscriber setup
//!
//! ## Examples
//!
//! ```
//! use mercadofacil::domain::entities::{Lot, Product};
//! use mercadofacil::domain::value_objects::{LotId, Price, ProductId};
//! use mercadofacil::infrastructure::persistence::Repository;
//! use mercadofacil::infrastructure::persistence::in_memory::VolatileLotRepository;
//!
//! let product = Product::builder(ProductId::new(1))
//!     .name("Produto Base")
//!     .barcode("123456789")
//!     .manufacturer("Fabricante Base")
//!     .price(Price::new(125.36).unwrap())
//!     .build();
//! let lot = Lot::builder(LotId::new(1), product).item_count(100).build();
//!
//! let repo = VolatileLotRepository::new();
//! repo.save(lot.clone()).unwrap();
//!
//! assert_eq!(repo.find(&LotId::new(1)).unwrap(), Some(lot));
//! assert_eq!(repo.find(&LotId::new(100)).unwrap(), None);
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
