//! # Domain Layer
//!
//! Catalogue entities and the value objects they are built from.
//!
//! This layer has no I/O and no knowledge of how entities are stored.

pub mod entities;
pub mod value_objects;
