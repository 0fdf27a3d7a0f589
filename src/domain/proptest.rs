//! Property-Based Tests for the Domain Model
//!
//! Uses proptest to check the value object invariants and the storage place
//! occupancy rules over a wide range of inputs.
//!
//! # Test Properties
//!
//! 1. **Volume**: positive values are accepted verbatim, the rest rejected;
//!    ordering is a total order on the wrapped value
//! 2. **Location**: in-grid coordinates are accepted verbatim, the rest
//!    rejected; distance is symmetric and zero to itself
//! 3. **StoragePlace**: rejected operations never change state

#![cfg(test)]

use proptest::prelude::*;
use uuid::Uuid;

use super::{Location, OrderId, StoragePlace, Volume};
use crate::error::Error;

// =============================================================================
// Property Strategies
// =============================================================================

fn volume_strategy() -> impl Strategy<Value = Volume> {
    (1i32..=1000).prop_map(|v| Volume::create(v).unwrap())
}

fn coordinate_strategy() -> impl Strategy<Value = i32> {
    Location::MIN_COORDINATE..=Location::MAX_COORDINATE
}

fn location_strategy() -> impl Strategy<Value = Location> {
    (coordinate_strategy(), coordinate_strategy()).prop_map(|(x, y)| Location::create(x, y).unwrap())
}

fn out_of_grid_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![
        i32::MIN..Location::MIN_COORDINATE,
        (Location::MAX_COORDINATE + 1)..=i32::MAX,
    ]
}

fn order_id() -> OrderId {
    OrderId::new(Uuid::new_v4())
}

// =============================================================================
// Volume Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_volume_accepts_positive(value in 1i32..=i32::MAX) {
        let volume = Volume::create(value)?;
        prop_assert_eq!(volume.value(), value);
    }

    #[test]
    fn prop_volume_rejects_non_positive(value in i32::MIN..=0) {
        prop_assert_eq!(Volume::create(value), Err(Error::ValueIsInvalid { name: "value" }));
    }

    #[test]
    fn prop_volume_total_order(a in volume_strategy(), b in volume_strategy()) {
        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|r| **r).count(), 1);
        prop_assert_eq!(a <= b, a < b || a == b);
        prop_assert_eq!(a >= b, a > b || a == b);
    }
}

// =============================================================================
// Location Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_location_accepts_grid(x in coordinate_strategy(), y in coordinate_strategy()) {
        let location = Location::create(x, y)?;
        prop_assert_eq!((location.x(), location.y()), (x, y));
    }

    #[test]
    fn prop_location_rejects_x_outside_grid(x in out_of_grid_strategy(), y in any::<i32>()) {
        prop_assert_eq!(Location::create(x, y), Err(Error::ValueIsInvalid { name: "x" }));
    }

    #[test]
    fn prop_location_rejects_y_outside_grid(x in coordinate_strategy(), y in out_of_grid_strategy()) {
        prop_assert_eq!(Location::create(x, y), Err(Error::ValueIsInvalid { name: "y" }));
    }

    #[test]
    fn prop_distance_symmetric(a in location_strategy(), b in location_strategy()) {
        prop_assert_eq!(a.distance_to(&b)?, b.distance_to(&a)?);
        prop_assert_eq!(a.distance_to(&a)?, 0);
    }

    #[test]
    fn prop_distance_is_manhattan(a in location_strategy(), b in location_strategy()) {
        let expected = (a.x() - b.x()).unsigned_abs() + (a.y() - b.y()).unsigned_abs();
        prop_assert_eq!(a.distance_to(&b)?, expected);
    }
}

// =============================================================================
// Storage Place Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: `store_order` accepts exactly when `can_store_order` does and
    /// leaves the place untouched otherwise.
    #[test]
    fn prop_store_matches_can_store(
        capacity in volume_strategy(),
        order_volume in volume_strategy(),
        occupied in any::<bool>(),
    ) {
        let mut place = StoragePlace::create("Bag", capacity)?;
        let existing = order_id();
        if occupied {
            place.store_order(existing, Volume::create(1)?)?;
        }
        let before = place.order_id();

        let check = place.can_store_order(order_volume);
        let incoming = order_id();
        let result = place.store_order(incoming, order_volume);

        match check {
            Ok(_) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(place.order_id(), Some(incoming));
            }
            Err(err) => {
                prop_assert_eq!(result, Err(err));
                prop_assert_eq!(place.order_id(), before);
            }
        }
    }

    /// Property: remove always empties the place and a fitting order can then
    /// be stored again.
    #[test]
    fn prop_remove_then_store(capacity in volume_strategy(), removals in 1usize..4) {
        let mut place = StoragePlace::create("Bag", capacity)?;
        place.store_order(order_id(), capacity)?;

        for _ in 0..removals {
            place.remove_current_order();
            prop_assert!(place.is_empty());
        }

        let next = order_id();
        place.store_order(next, capacity)?;
        prop_assert_eq!(place.order_id(), Some(next));
    }
}
