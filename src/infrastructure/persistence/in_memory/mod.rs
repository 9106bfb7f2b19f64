//! # In-Memory Repositories
//!
//! Volatile implementations for development and testing without a database.
//!
//! ## Available Repositories
//!
//! - [`VolatileRepository`]: generic store for any entity type
//! - [`VolatileProductRepository`]: product store
//! - [`VolatileLotRepository`]: lot store
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod volatile_repository;

pub use volatile_repository::{
    VolatileLotRepository, VolatileProductRepository, VolatileRepository,
};
