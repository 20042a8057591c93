//! Station registry service for bike-share snapshot queries
//!
//! This module loads station records from a snapshot CSV, keeps them in file
//! order, and answers availability and proximity queries over them.

use crate::app::models::Station;
use std::time::Instant;

pub mod distance;
pub mod loader;
pub mod metadata;
pub mod parser;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{LoadStats, RegistryMetadata};

/// Ordered collection of stations loaded from one snapshot
///
/// Stations are stored in source order and never modified after loading;
/// every query builds a fresh result.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    /// Stations in source file order
    pub(crate) stations: Vec<Station>,

    /// Name of the source the stations were read from
    pub(crate) source: String,

    /// Timestamp when the registry was loaded
    pub(crate) load_time: Instant,
}

impl StationRegistry {
    /// Wrap an already loaded station list
    pub fn from_stations(source: impl Into<String>, stations: Vec<Station>) -> Self {
        Self {
            stations,
            source: source.into(),
            load_time: Instant::now(),
        }
    }

    /// All stations in source order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Get the total number of stations in the registry
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Get registry metadata
    pub fn metadata(&self) -> RegistryMetadata {
        RegistryMetadata {
            source: self.source.clone(),
            station_count: self.stations.len(),
            stations_with_bikes: self
                .stations
                .iter()
                .filter(|station| station.available_bikes > 0)
                .count(),
            total_available_bikes: self
                .stations
                .iter()
                .map(|station| station.available_bikes)
                .sum(),
            total_docks: self
                .stations
                .iter()
                .map(|station| station.total_docks)
                .sum(),
            load_time: self.load_time,
        }
    }
}
