//! Error types for the courier storage domain

use thiserror::Error;

use crate::domain::{OrderId, StoragePlaceId, Volume};

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the courier storage domain.
///
/// Every variant maps to a stable machine-readable code (see [`Error::code`]);
/// the `Display` output is the human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// A required value was not supplied
    #[error("Value is required for {name}")]
    ValueIsRequired { name: &'static str },

    /// A value was supplied but lies outside its domain
    #[error("Value is invalid for {name}")]
    ValueIsInvalid { name: &'static str },

    // =========================================================================
    // Storage Place Rules
    // =========================================================================
    /// The storage place already holds an order
    #[error("Cannot store a new order in the storage place: order {order_id} is already stored")]
    StoragePlaceAlreadyHasOrder { order_id: OrderId },

    /// The order does not fit into the storage place
    #[error(
        "Cannot store a new order in the storage place: order volume ({order_volume}) \
         exceeds storage place capacity ({total_volume})"
    )]
    StoragePlaceIsTooSmall {
        order_volume: Volume,
        total_volume: Volume,
    },

    // =========================================================================
    // Repository Errors
    // =========================================================================
    /// No storage place is stored under the given id
    #[error("Storage place not found: {id}")]
    StoragePlaceNotFound { id: StoragePlaceId },

    /// A storage place with the given id is already stored
    #[error("Storage place already exists: {id}")]
    StoragePlaceAlreadyExists { id: StoragePlaceId },

    /// The stored version moved on since the place was loaded
    #[error("Version conflict for storage place {id}: expected {expected}, found {actual}")]
    VersionConflict {
        id: StoragePlaceId,
        expected: u64,
        actual: u64,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Stable machine-readable code of this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::ValueIsRequired { .. } => "value.is.required",
            Error::ValueIsInvalid { .. } => "value.is.invalid",
            Error::StoragePlaceAlreadyHasOrder { .. } => "storage.place.already.has.order",
            Error::StoragePlaceIsTooSmall { .. } => "storage.place.too.small",
            Error::StoragePlaceNotFound { .. } => "storage.place.not.found",
            Error::StoragePlaceAlreadyExists { .. } => "storage.place.already.exists",
            Error::VersionConflict { .. } => "storage.place.version.conflict",
            Error::Config(_) => "config.invalid",
        }
    }

    /// True for construction-time validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::ValueIsRequired { .. } | Error::ValueIsInvalid { .. }
        )
    }

    /// True for storage place placement rule violations.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Error::StoragePlaceAlreadyHasOrder { .. } | Error::StoragePlaceIsTooSmall { .. }
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_codes_are_stable() {
        let order_id = OrderId::new(Uuid::nil());
        let small = Volume::create(3).unwrap();
        let big = Volume::create(7).unwrap();

        assert_eq!(
            Error::StoragePlaceAlreadyHasOrder { order_id }.code(),
            "storage.place.already.has.order"
        );
        assert_eq!(
            Error::StoragePlaceIsTooSmall {
                order_volume: big,
                total_volume: small,
            }
            .code(),
            "storage.place.too.small"
        );
        assert_eq!(
            Error::ValueIsRequired { name: "name" }.code(),
            "value.is.required"
        );
        assert_eq!(Error::ValueIsInvalid { name: "x" }.code(), "value.is.invalid");
    }

    #[test]
    fn test_messages_carry_diagnostics() {
        let order_id = OrderId::new(Uuid::nil());
        let message = Error::StoragePlaceAlreadyHasOrder { order_id }.to_string();
        assert!(message.contains("00000000-0000-0000-0000-000000000000"));

        let message = Error::StoragePlaceIsTooSmall {
            order_volume: Volume::create(10).unwrap(),
            total_volume: Volume::create(5).unwrap(),
        }
        .to_string();
        assert!(message.contains("10л"));
        assert!(message.contains("5л"));

        assert_eq!(
            Error::ValueIsInvalid { name: "y" }.to_string(),
            "Value is invalid for y"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::ValueIsRequired { name: "name" }.is_validation());
        assert!(!Error::ValueIsRequired { name: "name" }.is_business_rule());

        let occupied = Error::StoragePlaceAlreadyHasOrder {
            order_id: OrderId::new(Uuid::nil()),
        };
        assert!(occupied.is_business_rule());
        assert!(!occupied.is_validation());

        assert!(!Error::Config("bad".into()).is_validation());
    }
}
