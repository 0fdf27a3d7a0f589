//! Courier Aggregate
//!
//! Entities owned by a courier. Currently the storage places the courier
//! carries orders in.

mod storage_place;

pub use storage_place::StoragePlace;
