//! Station registry metadata and statistics tracking
//!
//! This module defines the data structures for tracking what a load read
//! and a summary of the loaded snapshot.

use serde::Serialize;
use std::time::Instant;

/// Statistics about a single snapshot load
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadStats {
    /// Data rows read from the source (header excluded)
    pub records_read: usize,

    /// Number of stations loaded
    pub stations_loaded: usize,

    /// Time taken to load the snapshot
    pub load_duration: std::time::Duration,
}

impl LoadStats {
    /// Calculate the loading rate in stations per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.stations_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Read {} rows, loaded {} stations in {:.3}s ({:.0} stations/s)",
            self.records_read,
            self.stations_loaded,
            self.load_duration.as_secs_f64(),
            self.loading_rate()
        )
    }
}

/// Summary of a loaded registry
#[derive(Debug, Clone)]
pub struct RegistryMetadata {
    /// Source the stations were read from
    pub source: String,

    /// Number of stations in the registry
    pub station_count: usize,

    /// Stations with at least one bike available
    pub stations_with_bikes: usize,

    /// Sum of available bikes across all stations
    pub total_available_bikes: i64,

    /// Sum of dock capacity across all stations
    pub total_docks: i64,

    /// When the registry was loaded
    pub load_time: Instant,
}

impl RegistryMetadata {
    /// Share of stations that can serve a hire, as a percentage
    pub fn coverage_percent(&self) -> f64 {
        if self.station_count == 0 {
            0.0
        } else {
            (self.stations_with_bikes as f64 / self.station_count as f64) * 100.0
        }
    }
}
