//! # Infrastructure Layer
//!
//! Storage backends behind the persistence port.

pub mod persistence;
