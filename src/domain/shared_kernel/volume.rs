//! Volume value object

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Positive capacity or size measurement.
///
/// Ordering and equality are defined purely on the wrapped integer. The unit
/// suffix only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Volume {
    value: i32,
}

impl Volume {
    /// Unit suffix used by `Display` (liters).
    pub const DEFAULT_UNIT: &'static str = "л";

    /// Create a volume, rejecting zero and negative values.
    pub fn create(value: i32) -> Result<Self> {
        if value <= 0 {
            return Err(Error::ValueIsInvalid { name: "value" });
        }

        Ok(Self { value })
    }

    /// Raw integer value.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Render with a caller-provided unit suffix.
    pub fn display_with(&self, unit: &str) -> String {
        format!("{}{}", self.value, unit)
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, Self::DEFAULT_UNIT)
    }
}

impl TryFrom<i32> for Volume {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::create(value)
    }
}

impl From<Volume> for i32 {
    fn from(volume: Volume) -> Self {
        volume.value
    }
}

// =============================================================================
// Tests
// =============================================================================
