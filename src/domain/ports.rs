//! Domain Ports (DDD Port/Adapter Pattern)
//!
//! Abstractions for the collaborators that own storage places between calls.
//! Domain objects carry no synchronization, so concurrent load-mutate-save
//! cycles are serialized here with a per-place version number.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Domain Layer                            │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │                    Ports (Traits)                    │    │
//! │  │        StoragePlaceRepository │ EventPublisher       │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Infrastructure Layer                       │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │                  Adapters (Impls)                    │    │
//! │  │  InMemoryStoragePlaceRepository │ LoggingEventPub.  │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use super::courier::StoragePlace;
use super::events::DomainEvent;
use super::identity::StoragePlaceId;
use crate::error::Result;

// =============================================================================
// Storage Place Repository Port
// =============================================================================

/// A stored value together with the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub value: T,
    pub version: u64,
}

impl<T> Versioned<T> {
    pub fn new(value: T, version: u64) -> Self {
        Self { value, version }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Port for storage place persistence.
///
/// # Example
///
/// ```ignore
/// let Versioned { value: mut place, version } = repo
///     .get(&id)
///     .await?
///     .ok_or(Error::StoragePlaceNotFound { id })?;
///
/// place.store_order(order_id, order_volume)?;
/// repo.update(&place, version).await?;
/// ```
#[async_trait]
pub trait StoragePlaceRepository: Send + Sync {
    /// Insert a new place at version 1.
    async fn add(&self, place: &StoragePlace) -> Result<u64>;

    /// Load a place with its current version.
    async fn get(&self, id: &StoragePlaceId) -> Result<Option<Versioned<StoragePlace>>>;

    /// Replace a place if its stored version still equals `expected_version`.
    ///
    /// Returns the new version.
    async fn update(&self, place: &StoragePlace, expected_version: u64) -> Result<u64>;

    /// Delete a place. Returns whether it existed.
    async fn remove(&self, id: &StoragePlaceId) -> Result<bool>;

    /// All stored places.
    async fn list(&self) -> Result<Vec<StoragePlace>>;

    /// Stored places with no order in them.
    async fn find_empty(&self) -> Result<Vec<StoragePlace>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(StoragePlace::is_empty)
            .collect())
    }
}

// =============================================================================
// Event Publisher Port
// =============================================================================

/// Port for publishing domain events.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a domain event.
    async fn publish(&self, event: DomainEvent) -> Result<()>;

    /// Publish multiple events.
    async fn publish_all(&self, events: Vec<DomainEvent>) -> Result<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
