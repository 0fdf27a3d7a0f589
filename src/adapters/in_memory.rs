//! In-Memory Storage Place Repository
//!
//! Implements the `StoragePlaceRepository` port over a locked hash map. The
//! version check and the write happen under one write lock, so two callers
//! updating from the same version cannot both succeed.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::ports::{StoragePlaceRepository, Versioned};
use crate::domain::{StoragePlace, StoragePlaceId};
use crate::error::{Error, Result};

/// Storage place repository kept entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStoragePlaceRepository {
    places: RwLock<HashMap<StoragePlaceId, Versioned<StoragePlace>>>,
}

impl InMemoryStoragePlaceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored places.
    pub fn len(&self) -> usize {
        self.places.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.read().is_empty()
    }
}

#[async_trait]
impl StoragePlaceRepository for InMemoryStoragePlaceRepository {
    async fn add(&self, place: &StoragePlace) -> Result<u64> {
        let mut places = self.places.write();
        let id = place.id();
        if places.contains_key(&id) {
            return Err(Error::StoragePlaceAlreadyExists { id });
        }

        places.insert(id, Versioned::new(place.clone(), 1));
        debug!(storage_place_id = %id, "Storage place added");
        Ok(1)
    }

    async fn get(&self, id: &StoragePlaceId) -> Result<Option<Versioned<StoragePlace>>> {
        Ok(self.places.read().get(id).cloned())
    }

    async fn update(&self, place: &StoragePlace, expected_version: u64) -> Result<u64> {
        let mut places = self.places.write();
        let id = place.id();
        let stored = places
            .get_mut(&id)
            .ok_or(Error::StoragePlaceNotFound { id })?;

        if stored.version != expected_version {
            warn!(
                storage_place_id = %id,
                expected = expected_version,
                actual = stored.version,
                "Rejected stale storage place update"
            );
            return Err(Error::VersionConflict {
                id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        stored.value = place.clone();
        stored.version += 1;
        debug!(storage_place_id = %id, version = stored.version, "Storage place updated");
        Ok(stored.version)
    }

    async fn remove(&self, id: &StoragePlaceId) -> Result<bool> {
        Ok(self.places.write().remove(id).is_some())
    }

    async fn list(&self) -> Result<Vec<StoragePlace>> {
        Ok(self
            .places
            .read()
            .values()
            .map(|stored| stored.value.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderId, Volume};
    use assert_matches::assert_matches;
    use uuid::Uuid;

    fn place(capacity: i32) -> StoragePlace {
        StoragePlace::create("Bag", Volume::create(capacity).unwrap()).unwrap()
    }

    fn order_id() -> OrderId {
        OrderId::new(Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let repo = InMemoryStoragePlaceRepository::new();
        let bag = place(10);

        assert_eq!(repo.add(&bag).await.unwrap(), 1);
        assert_eq!(repo.len(), 1);

        let stored = repo.get(&bag.id()).await.unwrap().unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.value, bag);

        let missing = StoragePlaceId::new(Uuid::new_v4());
        assert!(repo.get(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_duplicate() {
        let repo = InMemoryStoragePlaceRepository::new();
        let bag = place(10);
        repo.add(&bag).await.unwrap();

        let err = repo.add(&bag).await.unwrap_err();
        assert_eq!(err.code(), "storage.place.already.exists");
    }

    #[tokio::test]
    async fn test_update_bumps_version() {
        let repo = InMemoryStoragePlaceRepository::new();
        let mut bag = place(10);
        repo.add(&bag).await.unwrap();

        let order = order_id();
        bag.store_order(order, Volume::create(5).unwrap()).unwrap();
        assert_eq!(repo.update(&bag, 1).await.unwrap(), 2);

        let stored = repo.get(&bag.id()).await.unwrap().unwrap();
        assert_eq!(stored.version, 2);
        assert_eq!(stored.value.order_id(), Some(order));
    }

    #[tokio::test]
    async fn test_stale_update_is_rejected() {
        let repo = InMemoryStoragePlaceRepository::new();
        let bag = place(10);
        repo.add(&bag).await.unwrap();

        let mut first = repo.get(&bag.id()).await.unwrap().unwrap();
        let mut second = repo.get(&bag.id()).await.unwrap().unwrap();

        let winner = order_id();
        first
            .value
            .store_order(winner, Volume::create(5).unwrap())
            .unwrap();
        repo.update(&first.value, first.version).await.unwrap();

        second
            .value
            .store_order(order_id(), Volume::create(3).unwrap())
            .unwrap();
        let err = repo
            .update(&second.value, second.version)
            .await
            .unwrap_err();
        assert_matches!(
            err,
            Error::VersionConflict {
                expected: 1,
                actual: 2,
                ..
            }
        );
        assert_eq!(err.code(), "storage.place.version.conflict");

        let stored = repo.get(&bag.id()).await.unwrap().unwrap();
        assert_eq!(stored.value.order_id(), Some(winner));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryStoragePlaceRepository::new();
        let err = repo.update(&place(10), 1).await.unwrap_err();
        assert_matches!(err, Error::StoragePlaceNotFound { .. });
    }

    #[tokio::test]
    async fn test_find_empty_and_remove() {
        let repo = InMemoryStoragePlaceRepository::new();
        let empty = place(10);
        let mut full = place(10);
        full.store_order(order_id(), Volume::create(1).unwrap()).unwrap();

        repo.add(&empty).await.unwrap();
        repo.add(&full).await.unwrap();

        let found = repo.find_empty().await.unwrap();
        assert_eq!(found, vec![empty.clone()]);
        assert_eq!(repo.list().await.unwrap().len(), 2);

        assert!(repo.remove(&empty.id()).await.unwrap());
        assert!(!repo.remove(&empty.id()).await.unwrap());
        assert!(repo.find_empty().await.unwrap().is_empty());
    }
}
