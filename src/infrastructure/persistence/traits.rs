//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! [`Repository`] is generic over an entity type and its identifier type.
//! Backends implement it once; catalogue entities opt in through [`Entity`].
//!
//! # Miss Handling
//!
//! A lookup or update of an unknown identifier is not an error. `find` and
//! `update` return `Ok(None)` and deleting an unknown entity is a no-op.
//! `Err` is reserved for backend faults.
//!
//! # Examples
//!
//! ```
//! use mercadofacil::domain::entities::{Lot, Product};
//! use mercadofacil::domain::value_objects::{LotId, ProductId};
//! use mercadofacil::infrastructure::persistence::{Repository, RepositoryResult};
//! use mercadofacil::infrastructure::persistence::in_memory::VolatileLotRepository;
//!
//! fn restock(repo: &impl Repository<Lot, LotId>, id: LotId, units: u32) -> RepositoryResult<bool> {
//!     let Some(mut lot) = repo.find(&id)? else {
//!         return Ok(false);
//!     };
//!     lot.set_item_count(lot.item_count() + units);
//!     Ok(repo.update(lot)?.is_some())
//! }
//!
//! let repo = VolatileLotRepository::new();
//! repo.save(Lot::new(LotId::new(1), 10, Product::builder(ProductId::new(1)).build())).unwrap();
//!
//! assert!(restock(&repo, LotId::new(1), 5).unwrap());
//! assert!(!restock(&repo, LotId::new(2), 5).unwrap());
//! assert_eq!(repo.find(&LotId::new(1)).unwrap().unwrap().item_count(), 15);
//! ```

use crate::domain::entities::{Lot, Product};
use crate::domain::value_objects::{LotId, ProductId};
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Bounds every identifier type must satisfy to key a store.
pub trait EntityId: Eq + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> EntityId for T where
    T: Eq + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

/// A record addressed by an identifier of type `ID`.
pub trait Entity<ID: EntityId>: Clone + fmt::Debug + Send + Sync + 'static {
    /// Entity name used in logs and errors.
    const ENTITY_TYPE: &'static str;

    /// Returns the identifier that keys this entity in a store.
    fn entity_id(&self) -> ID;
}

impl Entity<ProductId> for Product {
    const ENTITY_TYPE: &'static str = "Product";

    fn entity_id(&self) -> ProductId {
        self.id()
    }
}

impl Entity<LotId> for Lot {
    const ENTITY_TYPE: &'static str = "Lot";

    fn entity_id(&self) -> LotId {
        self.id()
    }
}

/// Keyed CRUD store for entities of type `E` identified by `ID`.
///
/// At most one entity is stored per identifier.
pub trait Repository<E, ID>: Send + Sync + fmt::Debug
where
    E: Entity<ID>,
    ID: EntityId,
{
    /// Saves an entity under its identifier.
    ///
    /// If the identifier is already present its value is replaced.
    /// Returns the saved entity.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn save(&self, entity: E) -> RepositoryResult<E>;

    /// Gets an entity by ID.
    ///
    /// Returns `None` if the entity does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn find(&self, id: &ID) -> RepositoryResult<Option<E>>;

    /// Gets every stored entity, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn find_all(&self) -> RepositoryResult<Vec<E>>;

    /// Replaces an existing entity.
    ///
    /// Returns the new value, or `None` without touching the store if no
    /// entity has the same identifier. Update never creates.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn update(&self, entity: E) -> RepositoryResult<Option<E>>;

    /// Deletes an entity by ID.
    ///
    /// Returns `Ok(true)` if the entity was deleted, `Ok(false)` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn delete_by_id(&self, id: &ID) -> RepositoryResult<bool>;

    /// Deletes every entity.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn delete_all(&self) -> RepositoryResult<()>;

    /// Counts all entities.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn count(&self) -> RepositoryResult<u64>;

    /// Deletes the entry with the same identifier as `entity`.
    ///
    /// Deleting an entity that is not stored is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn delete(&self, entity: &E) -> RepositoryResult<()> {
        self.delete_by_id(&entity.entity_id()).map(|_| ())
    }

    /// Returns true if an entity with this ID is stored.
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn exists(&self, id: &ID) -> RepositoryResult<bool> {
        Ok(self.find(id)?.is_some())
    }

    /// Gets an entity by ID, treating a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entity does not exist.
    fn find_required(&self, id: &ID) -> RepositoryResult<E> {
        self.find(id)?
            .ok_or_else(|| RepositoryError::not_found(E::ENTITY_TYPE, id))
    }
}
