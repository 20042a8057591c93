//! Data models for bike-share stations
//!
//! This module contains the station record loaded from the snapshot file and
//! the derived entries produced by the availability and proximity queries.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// Coordinates
// =============================================================================

/// Geographic position as a (latitude, longitude) pair
///
/// No range checks are applied; whatever the source contains is carried through.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Lexicographic total order on (latitude, longitude)
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.latitude
            .total_cmp(&other.latitude)
            .then_with(|| self.longitude.total_cmp(&other.longitude))
    }

    /// True when both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

// =============================================================================
// Station
// =============================================================================

/// A docking station as read from one row of the snapshot
///
/// Counts are taken as-is: `empty_docks` is not reconciled against
/// `total_docks` or `available_bikes`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Station {
    /// Station name (not guaranteed unique)
    pub name: String,

    /// Total docking capacity
    pub total_docks: i64,

    /// Docks currently empty
    pub empty_docks: i64,

    /// Bikes currently available for hire
    pub available_bikes: i64,

    /// Station position
    pub location: Coordinates,
}

impl Station {
    pub fn new(
        name: impl Into<String>,
        total_docks: i64,
        empty_docks: i64,
        available_bikes: i64,
        location: Coordinates,
    ) -> Self {
        Self {
            name: name.into(),
            total_docks,
            empty_docks,
            available_bikes,
            location,
        }
    }

    /// Whether at least `threshold` bikes are available
    pub fn has_at_least(&self, threshold: i64) -> bool {
        self.available_bikes >= threshold
    }
}

// =============================================================================
// Derived Entries
// =============================================================================

/// Row of the availability ranking: (available bikes, name, location)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AvailabilityEntry {
    pub available_bikes: i64,
    pub name: String,
    pub location: Coordinates,
}

impl AvailabilityEntry {
    /// Natural tuple order: bikes, then name, then location
    pub fn tuple_cmp(&self, other: &Self) -> Ordering {
        self.available_bikes
            .cmp(&other.available_bikes)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.location.total_cmp(&other.location))
    }
}

impl From<&Station> for AvailabilityEntry {
    fn from(station: &Station) -> Self {
        Self {
            available_bikes: station.available_bikes,
            name: station.name.clone(),
            location: station.location,
        }
    }
}

/// Row of the proximity ranking: (distance, name, available bikes)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProximityEntry {
    pub distance: f64,
    pub name: String,
    pub available_bikes: i64,
}

impl ProximityEntry {
    /// Natural tuple order: distance, then name, then bikes
    pub fn tuple_cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.available_bikes.cmp(&other.available_bikes))
    }
}
