//! Courier Storage - capacity-managed storage places for couriers
//!
//! The domain core of a delivery service: the storage places a courier
//! carries orders in, plus the `Volume` and `Location` value objects. A
//! storage place holds at most one order at a time and never accepts an
//! order larger than its capacity; grid locations are always in bounds.
//!
//! # Modules
//!
//! - [`domain`] - Value objects, the `StoragePlace` entity, ports and events
//! - [`adapters`] - In-memory implementations of the domain ports
//! - [`config`] - Display and logging configuration
//! - [`error`] - Error types with stable codes

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Location, OrderId, StoragePlace, StoragePlaceId, Volume};
pub use error::{Error, Result};
