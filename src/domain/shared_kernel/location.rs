//! Location value object
//!
//! A point on the fixed delivery grid. Both coordinates are bounded by
//! [`Location::MIN_COORDINATE`] and [`Location::MAX_COORDINATE`] inclusive,
//! and the distance between two points is the Manhattan distance.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Point on the delivery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    x: i32,
    y: i32,
}

/// Unvalidated wire shape, only used to route deserialization through `create`.
#[derive(Deserialize)]
struct LocationRepr {
    x: i32,
    y: i32,
}

impl Location {
    /// Smallest valid coordinate.
    pub const MIN_COORDINATE: i32 = 1;

    /// Largest valid coordinate.
    pub const MAX_COORDINATE: i32 = 10;

    /// Create a location. `x` is validated before `y`.
    pub fn create(x: i32, y: i32) -> Result<Self> {
        if !Self::in_bounds(x) {
            return Err(Error::ValueIsInvalid { name: "x" });
        }
        if !Self::in_bounds(y) {
            return Err(Error::ValueIsInvalid { name: "y" });
        }

        Ok(Self { x, y })
    }

    /// Create a location with both coordinates drawn uniformly from the grid.
    pub fn create_random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Same as [`Location::create_random`] but with a caller-supplied generator.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random_range(Self::MIN_COORDINATE..=Self::MAX_COORDINATE);
        let y = rng.random_range(Self::MIN_COORDINATE..=Self::MAX_COORDINATE);

        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Manhattan distance to `target`.
    ///
    /// Accepts either `&Location` or an `Option<&Location>`; an absent target
    /// yields [`Error::ValueIsRequired`].
    pub fn distance_to<'a>(&self, target: impl Into<Option<&'a Location>>) -> Result<u32> {
        let target = target
            .into()
            .ok_or(Error::ValueIsRequired { name: "target" })?;

        Ok(self.x.abs_diff(target.x) + self.y.abs_diff(target.y))
    }

    #[inline]
    fn in_bounds(coordinate: i32) -> bool {
        (Self::MIN_COORDINATE..=Self::MAX_COORDINATE).contains(&coordinate)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = LocationRepr::deserialize(deserializer)?;
        Self::create(repr.x, repr.y).map_err(serde::de::Error::custom)
    }
}

/// Parses `"x,y"` (whitespace around either part is ignored).
impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or(Error::ValueIsRequired { name: "y" })?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| Error::ValueIsInvalid { name: "x" })?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| Error::ValueIsInvalid { name: "y" })?;

        Self::create(x, y)
    }
}

// =============================================================================
// Tests
// =============================================================================
