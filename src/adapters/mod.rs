//! Infrastructure Adapters
//!
//! This module contains adapter implementations for the domain ports,
//! following the Port/Adapter (Hexagonal) architecture pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Layer                              │
//! │  ┌────────────────────────────────────────────────────────────┐ │
//! │  │                    Ports (Traits)                           │ │
//! │  │           StoragePlaceRepository │ EventPublisher           │ │
//! │  └────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters (This Module)                       │
//! │  ┌────────────────────────────────────────────────────────────┐ │
//! │  │ InMemoryStoragePlaceRepository                              │ │
//! │  │ LoggingEventPublisher │ InMemoryEventCollector              │ │
//! │  └────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use courier_storage::adapters::InMemoryStoragePlaceRepository;
//! use courier_storage::domain::ports::StoragePlaceRepository;
//!
//! let repo = InMemoryStoragePlaceRepository::new();
//! let version = repo.add(&place).await?;
//! ```

mod event_publisher;
mod in_memory;

pub use event_publisher::{InMemoryEventCollector, LoggingEventPublisher};
pub use in_memory::InMemoryStoragePlaceRepository;
