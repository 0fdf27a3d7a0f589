//! Identity value objects
//!
//! Opaque UUID-backed identities. Storage place ids are minted by
//! [`StoragePlace::create`](super::StoragePlace::create); order ids always come
//! from the caller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage place identifier (value object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoragePlaceId(Uuid);

impl StoragePlaceId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Mint a fresh random identity.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for StoragePlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for StoragePlaceId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Identifier of an order held by a storage place (value object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
