//! # Persistence Layer
//!
//! Repository port and its implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`Repository`]: generic keyed CRUD over any [`Entity`]
//!
//! ## Implementations
//!
//! - `in_memory`: volatile store for development and tests

pub mod in_memory;
pub mod traits;

pub use traits::{Entity, EntityId, Repository, RepositoryError, RepositoryResult};
