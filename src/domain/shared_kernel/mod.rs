//! Shared Kernel
//!
//! Value objects used across aggregates. Both are immutable and compare by
//! value.

mod location;
mod volume;

pub use location::Location;
pub use volume::Volume;
