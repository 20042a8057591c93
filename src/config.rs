//! Query configuration and validation.
//!
//! Collects the tunable query parameters with their documented defaults so
//! callers can pass one value instead of repeating arguments.

use crate::app::models::Coordinates;
use crate::app::services::station_registry::distance::DistanceMetric;
use crate::app::services::station_registry::query::ResultLimit;
use crate::constants::{
    DEFAULT_MIN_BIKES, DEFAULT_NEAREST_COUNT, DEFAULT_REFERENCE_LATITUDE,
    DEFAULT_REFERENCE_LONGITUDE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Parameters for availability and proximity queries
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Minimum available bikes for the availability ranking (default 5)
    pub min_bikes: i64,

    /// Requested count for the proximity ranking (default 5)
    pub nearest_count: usize,

    /// Point the proximity ranking measures from
    pub reference_point: Coordinates,

    /// Distance formula for the proximity ranking
    pub metric: DistanceMetric,

    /// Truncation policy for the proximity ranking
    pub limit: ResultLimit,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            min_bikes: DEFAULT_MIN_BIKES,
            nearest_count: DEFAULT_NEAREST_COUNT,
            reference_point: Coordinates::new(
                DEFAULT_REFERENCE_LATITUDE,
                DEFAULT_REFERENCE_LONGITUDE,
            ),
            metric: DistanceMetric::default(),
            limit: ResultLimit::default(),
        }
    }
}

impl QueryConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::configuration(format!("Invalid configuration JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading query configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_json_str(&content)
    }

    /// Check the configuration for values no query can use
    pub fn validate(&self) -> Result<()> {
        if !self.reference_point.is_finite() {
            return Err(Error::configuration(format!(
                "Reference point must be finite, got {}",
                self.reference_point
            )));
        }

        Ok(())
    }
}
