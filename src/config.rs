//! Configuration
//!
//! Presentation and logging settings. Domain rules are not configurable; the
//! grid bounds and placement rules are fixed in the domain types.

use std::path::Path;

use serde::Deserialize;

use crate::domain::Volume;
use crate::error::{Error, Result};

// =============================================================================
// Display
// =============================================================================

/// How domain values are rendered for humans.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Unit suffix appended to volumes
    pub volume_unit: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            volume_unit: Volume::DEFAULT_UNIT.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Render a volume with the configured unit.
    pub fn volume(&self, volume: Volume) -> String {
        volume.display_with(&self.volume_unit)
    }

    /// Render an error message with volumes in the configured unit.
    pub fn error_message(&self, error: &Error) -> String {
        match error {
            Error::StoragePlaceIsTooSmall {
                order_volume,
                total_volume,
            } => format!(
                "Cannot store a new order in the storage place: order volume ({}) exceeds storage place capacity ({})",
                self.volume(*order_volume),
                self.volume(*total_volume)
            ),
            other => other.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.volume_unit.trim().is_empty() {
            return Err(Error::Config("volume_unit must not be blank".to_string()));
        }
        Ok(())
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output logs as JSON
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(Error::Config(format!("unknown log level '{}'", other))),
        }
    }
}

// =============================================================================
// Top-level
// =============================================================================

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.display.validate()?;
        self.logging.validate()
    }
}
