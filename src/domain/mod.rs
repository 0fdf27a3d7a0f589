//! Domain Layer
//!
//! This module contains the courier storage domain following Domain-Driven
//! Design principles. Nothing in here performs I/O or holds locks.
//!
//! # Architecture
//!
//! - **Shared kernel** (`shared_kernel/`) - `Volume` and `Location` value objects
//! - **Courier aggregate** (`courier/`) - the `StoragePlace` entity
//! - **Identity** (`identity.rs`) - UUID-backed ids
//! - **Ports** (`ports.rs`) - Trait abstractions for repositories and event sinks
//! - **Events** (`events.rs`) - Domain events for audit and decoupling
//!
//! # Usage
//!
//! ```
//! use courier_storage::domain::{OrderId, StoragePlace, Volume};
//! use uuid::Uuid;
//!
//! let mut bag = StoragePlace::create("Bag", Volume::create(10)?)?;
//! bag.store_order(OrderId::new(Uuid::new_v4()), Volume::create(5)?)?;
//! assert!(!bag.is_empty());
//! # Ok::<(), courier_storage::Error>(())
//! ```

pub mod courier;
pub mod events;
pub mod identity;
pub mod ports;
pub mod shared_kernel;

#[cfg(test)]
mod proptest;

// Re-export commonly used types
pub use courier::StoragePlace;
pub use events::DomainEvent;
pub use identity::{OrderId, StoragePlaceId};
pub use ports::{EventPublisher, StoragePlaceRepository, Versioned};
pub use shared_kernel::{Location, Volume};
