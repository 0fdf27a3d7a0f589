//! Domain Events
//!
//! Immutable records of storage place state changes. Entities never publish
//! events themselves; whoever drives a load-mutate-save cycle builds the event
//! from the outcome and hands it to an [`EventPublisher`](super::ports::EventPublisher).
//!
//! # Example
//!
//! ```ignore
//! place.store_order(order_id, volume)?;
//! repository.update(&place, version).await?;
//! publisher
//!     .publish(DomainEvent::order_stored(place.id(), order_id, volume))
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::{OrderId, StoragePlaceId};
use super::shared_kernel::Volume;
use crate::error::Error;

/// Domain event representing a storage place state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    /// A storage place was created.
    StoragePlaceCreated {
        storage_place_id: StoragePlaceId,
        name: String,
        total_volume: Volume,
        timestamp: DateTime<Utc>,
    },

    /// An order was placed into a storage place.
    OrderStored {
        storage_place_id: StoragePlaceId,
        order_id: OrderId,
        order_volume: Volume,
        timestamp: DateTime<Utc>,
    },

    /// An order was taken out of a storage place.
    OrderRemoved {
        storage_place_id: StoragePlaceId,
        order_id: OrderId,
        timestamp: DateTime<Utc>,
    },

    /// A placement attempt was refused by a business rule.
    OrderRejected {
        storage_place_id: StoragePlaceId,
        order_id: OrderId,
        code: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Get the timestamp of the event.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::StoragePlaceCreated { timestamp, .. } => *timestamp,
            DomainEvent::OrderStored { timestamp, .. } => *timestamp,
            DomainEvent::OrderRemoved { timestamp, .. } => *timestamp,
            DomainEvent::OrderRejected { timestamp, .. } => *timestamp,
        }
    }

    /// Get the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::StoragePlaceCreated { .. } => "StoragePlaceCreated",
            DomainEvent::OrderStored { .. } => "OrderStored",
            DomainEvent::OrderRemoved { .. } => "OrderRemoved",
            DomainEvent::OrderRejected { .. } => "OrderRejected",
        }
    }

    /// Get the storage place the event is about.
    pub fn storage_place_id(&self) -> StoragePlaceId {
        match self {
            DomainEvent::StoragePlaceCreated {
                storage_place_id, ..
            } => *storage_place_id,
            DomainEvent::OrderStored {
                storage_place_id, ..
            } => *storage_place_id,
            DomainEvent::OrderRemoved {
                storage_place_id, ..
            } => *storage_place_id,
            DomainEvent::OrderRejected {
                storage_place_id, ..
            } => *storage_place_id,
        }
    }
}

// =============================================================================
// Event Builders
// =============================================================================

impl DomainEvent {
    /// Create a StoragePlaceCreated event.
    pub fn storage_place_created(
        storage_place_id: StoragePlaceId,
        name: impl Into<String>,
        total_volume: Volume,
    ) -> Self {
        DomainEvent::StoragePlaceCreated {
            storage_place_id,
            name: name.into(),
            total_volume,
            timestamp: Utc::now(),
        }
    }

    /// Create an OrderStored event.
    pub fn order_stored(
        storage_place_id: StoragePlaceId,
        order_id: OrderId,
        order_volume: Volume,
    ) -> Self {
        DomainEvent::OrderStored {
            storage_place_id,
            order_id,
            order_volume,
            timestamp: Utc::now(),
        }
    }

    /// Create an OrderRemoved event.
    pub fn order_removed(storage_place_id: StoragePlaceId, order_id: OrderId) -> Self {
        DomainEvent::OrderRemoved {
            storage_place_id,
            order_id,
            timestamp: Utc::now(),
        }
    }

    /// Create an OrderRejected event from the error returned by the entity.
    pub fn order_rejected(
        storage_place_id: StoragePlaceId,
        order_id: OrderId,
        error: &Error,
    ) -> Self {
        DomainEvent::OrderRejected {
            storage_place_id,
            order_id,
            code: error.code().to_string(),
            reason: error.to_string(),
            timestamp: Utc::now(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
