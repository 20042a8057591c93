//! Station ranking queries
//!
//! Availability ranking (stations with at least `k` bikes, most bikes first)
//! and proximity ranking (stations with bikes, closest first). Both return
//! new vectors and leave the input untouched.

use super::StationRegistry;
use super::distance::DistanceMetric;
use crate::app::models::{AvailabilityEntry, Coordinates, ProximityEntry, Station};
use crate::config::QueryConfig;
use crate::constants::CANDIDATE_MIN_BIKES;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How many entries a proximity query returns for a requested count `k`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultLimit {
    /// Positions `0..=k`, i.e. `k + 1` entries; fails when fewer candidates exist
    #[default]
    Inclusive,
    /// At most `k` entries, fewer when candidates run out
    Clamped,
}

/// Stations with at least `k` available bikes, most bikes first
///
/// Entries are ordered by descending `(available_bikes, name, location)`, so
/// equal bike counts are ordered by name in reverse. A `k` of zero selects
/// every station whose count is not negative.
///
/// # Examples
/// ```
/// use sevici::{Coordinates, Station, stations_with_min_bikes};
///
/// let stations = vec![
///     Station::new("Plaza", 20, 5, 15, Coordinates::new(37.38, -5.98)),
///     Station::new("Torre", 18, 2, 16, Coordinates::new(37.39, -6.00)),
///     Station::new("Rio", 10, 10, 0, Coordinates::new(37.40, -5.99)),
/// ];
///
/// let ranked = stations_with_min_bikes(&stations, 5);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].name, "Torre");
/// assert_eq!(ranked[1].name, "Plaza");
/// ```
pub fn stations_with_min_bikes(stations: &[Station], k: i64) -> Vec<AvailabilityEntry> {
    let mut selected: Vec<AvailabilityEntry> = stations
        .iter()
        .filter(|station| station.has_at_least(k))
        .map(AvailabilityEntry::from)
        .collect();

    selected.sort_by(|a, b| b.tuple_cmp(a));

    debug!(
        "{} of {} stations have at least {} bikes",
        selected.len(),
        stations.len(),
        k
    );
    selected
}

/// The `k + 1` stations with bikes closest to `point`
///
/// Candidates are all stations with at least one bike, whatever `k` is.
/// Entries are ordered by ascending `(distance, name, available_bikes)` using
/// the reference [`distance`](super::distance::distance).
///
/// # Errors
/// * Returns `Error::OutOfRange` if fewer than `k + 1` stations have bikes
pub fn nearest_stations(
    stations: &[Station],
    point: Coordinates,
    k: usize,
) -> Result<Vec<ProximityEntry>> {
    nearest_stations_with(
        stations,
        point,
        k,
        DistanceMetric::Reference,
        ResultLimit::Inclusive,
    )
}

/// Proximity ranking with an explicit distance metric and result limit
///
/// # Errors
/// * Returns `Error::OutOfRange` under [`ResultLimit::Inclusive`] if fewer
///   than `k + 1` stations have bikes
pub fn nearest_stations_with(
    stations: &[Station],
    point: Coordinates,
    k: usize,
    metric: DistanceMetric,
    limit: ResultLimit,
) -> Result<Vec<ProximityEntry>> {
    let mut ranked: Vec<ProximityEntry> = stations_with_min_bikes(stations, CANDIDATE_MIN_BIKES)
        .into_iter()
        .map(|entry| ProximityEntry {
            distance: metric.measure(point, entry.location),
            name: entry.name,
            available_bikes: entry.available_bikes,
        })
        .collect();

    ranked.sort_by(ProximityEntry::tuple_cmp);

    match limit {
        ResultLimit::Inclusive => {
            let requested = k.saturating_add(1);
            if ranked.len() < requested {
                return Err(Error::out_of_range(requested, ranked.len()));
            }
            ranked.truncate(requested);
        }
        ResultLimit::Clamped => ranked.truncate(k),
    }

    debug!(
        "Ranked {} stations near {} ({:?}, {:?})",
        ranked.len(),
        point,
        metric,
        limit
    );
    Ok(ranked)
}

impl StationRegistry {
    /// Stations in this registry with at least `k` bikes, most bikes first
    pub fn stations_with_min_bikes(&self, k: i64) -> Vec<AvailabilityEntry> {
        stations_with_min_bikes(&self.stations, k)
    }

    /// The `k + 1` stations with bikes closest to `point`
    pub fn nearest_stations(&self, point: Coordinates, k: usize) -> Result<Vec<ProximityEntry>> {
        nearest_stations(&self.stations, point, k)
    }

    /// Availability ranking using the configured threshold
    pub fn available_with_config(&self, config: &QueryConfig) -> Vec<AvailabilityEntry> {
        stations_with_min_bikes(&self.stations, config.min_bikes)
    }

    /// Proximity ranking using the configured point, count, metric and limit
    pub fn nearest_with_config(&self, config: &QueryConfig) -> Result<Vec<ProximityEntry>> {
        config.validate()?;
        nearest_stations_with(
            &self.stations,
            config.reference_point,
            config.nearest_count,
            config.metric,
            config.limit,
        )
    }
}
