//! Storage Place Entity
//!
//! A capacity-bounded compartment carried by a courier. A place holds at most
//! one order at a time and never accepts an order larger than its capacity.
//!
//! # Occupancy
//!
//! ```text
//!            store_order(id, vol) [vol <= total]
//!   ┌───────┐ ─────────────────────────────────▶ ┌──────────────┐
//!   │ Empty │                                    │ Occupied(id) │
//!   └───────┘ ◀───────────────────────────────── └──────────────┘
//!       ▲          remove_current_order()             │
//!       └─ remove_current_order() (no-op)             └─ store_order(..) rejected
//! ```
//!
//! Placement checks live in [`StoragePlace::can_store_order`];
//! [`StoragePlace::store_order`] is "check, then commit".

use tracing::debug;

use crate::domain::identity::{OrderId, StoragePlaceId};
use crate::domain::shared_kernel::Volume;
use crate::error::{Error, Result};

/// Storage place entity. Equality and hashing use the identity only.
#[derive(Debug, Clone)]
pub struct StoragePlace {
    id: StoragePlaceId,
    name: String,
    total_volume: Volume,
    order_id: Option<OrderId>,
}

impl StoragePlace {
    /// Create an empty storage place with a fresh identity.
    ///
    /// An absent or empty `name` is [`Error::ValueIsRequired`]; a name made of
    /// whitespace only is [`Error::ValueIsInvalid`].
    pub fn create<'a>(name: impl Into<Option<&'a str>>, total_volume: Volume) -> Result<Self> {
        let name = validate_name(name.into())?;

        Ok(Self {
            id: StoragePlaceId::generate(),
            name: name.to_string(),
            total_volume,
            order_id: None,
        })
    }

    /// Rebuild a storage place from persisted state.
    ///
    /// The name goes through the same validation as [`StoragePlace::create`].
    pub fn restore(
        id: StoragePlaceId,
        name: &str,
        total_volume: Volume,
        order_id: Option<OrderId>,
    ) -> Result<Self> {
        let name = validate_name(Some(name))?;

        Ok(Self {
            id,
            name: name.to_string(),
            total_volume,
            order_id,
        })
    }

    pub fn id(&self) -> StoragePlaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_volume(&self) -> Volume {
        self.total_volume
    }

    /// Order currently occupying the place, if any.
    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    /// Check whether an order of `order_volume` can be placed here.
    ///
    /// Occupancy is checked before capacity.
    pub fn can_store_order(&self, order_volume: Volume) -> Result<bool> {
        if let Some(order_id) = self.order_id {
            return Err(Error::StoragePlaceAlreadyHasOrder { order_id });
        }
        if order_volume > self.total_volume {
            return Err(Error::StoragePlaceIsTooSmall {
                order_volume,
                total_volume: self.total_volume,
            });
        }

        Ok(true)
    }

    /// Place an order. On error the place is left untouched.
    pub fn store_order(&mut self, order_id: OrderId, order_volume: Volume) -> Result<()> {
        self.can_store_order(order_volume)?;

        self.order_id = Some(order_id);
        debug!(
            storage_place_id = %self.id,
            order_id = %order_id,
            order_volume = %order_volume,
            "Order stored"
        );

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.order_id.is_none()
    }

    /// Clear the place. Returns the order that was removed; calling this on an
    /// empty place is a no-op returning `None`.
    pub fn remove_current_order(&mut self) -> Option<OrderId> {
        let removed = self.order_id.take();
        if let Some(order_id) = removed {
            debug!(storage_place_id = %self.id, order_id = %order_id, "Order removed");
        }
        removed
    }
}

impl PartialEq for StoragePlace {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StoragePlace {}

impl std::hash::Hash for StoragePlace {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn validate_name(name: Option<&str>) -> Result<&str> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Error::ValueIsRequired { name: "name" }),
    };
    if name.trim().is_empty() {
        return Err(Error::ValueIsInvalid { name: "name" });
    }

    Ok(name)
}

// =============================================================================
// Tests
// =============================================================================
