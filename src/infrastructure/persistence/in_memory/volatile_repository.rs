//! # Volatile Repository
//!
//! Generic in-memory implementation of [`Repository`].
//!
//! Entities live in a `HashMap` behind a `parking_lot::RwLock`, so the store
//! is shared safely between threads and every operation completes without
//! suspending. Nothing survives the process.
//!
//! # Copy Semantics
//!
//! The store keeps its own copy of each entity. `save` and `update` clone
//! the value in, `find` and `find_all` clone it out. Mutating an entity
//! the caller still holds has no effect on the store until it is passed to
//! `update` (or `save`) again.

use crate::config::RepositorySettings;
use crate::domain::entities::{Lot, Product};
use crate::domain::value_objects::{LotId, ProductId};
use crate::infrastructure::persistence::traits::{
    Entity, EntityId, Repository, RepositoryResult,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// In-memory implementation of [`Repository`] for any entity type.
///
/// Cloning the repository yields another handle to the same store.
#[derive(Debug)]
pub struct VolatileRepository<E, ID> {
    storage: Arc<RwLock<HashMap<ID, E>>>,
}

/// Volatile store of [`Product`] entities.
pub type VolatileProductRepository = VolatileRepository<Product, ProductId>;

/// Volatile store of [`Lot`] entities.
pub type VolatileLotRepository = VolatileRepository<Lot, LotId>;

impl<E, ID> VolatileRepository<E, ID>
where
    E: Entity<ID>,
    ID: EntityId,
{
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty repository with room for `capacity` entities.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::with_capacity(capacity))),
        }
    }

    /// Creates a new empty repository sized from settings.
    #[must_use]
    pub fn from_settings(settings: &RepositorySettings) -> Self {
        Self::with_capacity(settings.initial_capacity)
    }

    /// Returns the number of entities in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E, ID> Clone for VolatileRepository<E, ID> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<E, ID> Default for VolatileRepository<E, ID>
where
    E: Entity<ID>,
    ID: EntityId,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, ID> Repository<E, ID> for VolatileRepository<E, ID>
where
    E: Entity<ID>,
    ID: EntityId,
{
    fn save(&self, entity: E) -> RepositoryResult<E> {
        let id = entity.entity_id();
        let mut storage = self.storage.write();
        let replaced = storage.insert(id.clone(), entity.clone()).is_some();
        debug!(entity = E::ENTITY_TYPE, %id, replaced, "entity saved");
        Ok(entity)
    }

    fn find(&self, id: &ID) -> RepositoryResult<Option<E>> {
        let storage = self.storage.read();
        let found = storage.get(id).cloned();
        trace!(entity = E::ENTITY_TYPE, %id, hit = found.is_some(), "entity lookup");
        Ok(found)
    }

    fn find_all(&self) -> RepositoryResult<Vec<E>> {
        let storage = self.storage.read();
        Ok(storage.values().cloned().collect())
    }

    fn update(&self, entity: E) -> RepositoryResult<Option<E>> {
        let id = entity.entity_id();
        let mut storage = self.storage.write();
        match storage.get_mut(&id) {
            Some(slot) => {
                *slot = entity.clone();
                debug!(entity = E::ENTITY_TYPE, %id, "entity updated");
                Ok(Some(entity))
            }
            None => {
                debug!(entity = E::ENTITY_TYPE, %id, "update skipped: entity not found");
                Ok(None)
            }
        }
    }

    fn delete_by_id(&self, id: &ID) -> RepositoryResult<bool> {
        let mut storage = self.storage.write();
        let removed = storage.remove(id).is_some();
        debug!(entity = E::ENTITY_TYPE, %id, removed, "entity deleted");
        Ok(removed)
    }

    fn delete_all(&self) -> RepositoryResult<()> {
        let mut storage = self.storage.write();
        let removed = storage.len();
        storage.clear();
        debug!(entity = E::ENTITY_TYPE, removed, "all entities deleted");
        Ok(())
    }

    fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read();
        Ok(storage.len() as u64)
    }
}
