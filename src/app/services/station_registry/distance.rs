//! Planar distance between coordinate pairs
//!
//! Distances are in raw degree units; no geodesic correction is applied.

use crate::app::models::Coordinates;
use serde::{Deserialize, Serialize};

/// Distance used by the published station rankings
///
/// Matches the reference outputs bit-for-bit. Each point contributes
/// `longitude - latitude` as one axis term:
///
/// ```text
/// x2, x1 = p1.longitude, p1.latitude
/// y2, y1 = p2.longitude, p2.latitude
/// sqrt((x2 - x1)^2 + (y2 - y1)^2)
/// ```
///
/// Because of this pairing the result is not the conventional Euclidean
/// distance; use [`DistanceMetric::Euclidean`] for that.
///
/// # Examples
/// ```
/// use sevici::{Coordinates, distance};
///
/// let d = distance(Coordinates::new(3.0, 7.0), Coordinates::new(1.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
pub fn distance(p1: Coordinates, p2: Coordinates) -> f64 {
    let (x2, x1) = (p1.longitude, p1.latitude);
    let (y2, y1) = (p2.longitude, p2.latitude);

    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Straight-line distance pairing latitude with latitude and longitude with longitude
pub fn euclidean_distance(p1: Coordinates, p2: Coordinates) -> f64 {
    let dlat = p2.latitude - p1.latitude;
    let dlon = p2.longitude - p1.longitude;
    (dlat * dlat + dlon * dlon).sqrt()
}

/// Distance formula used when ranking stations by proximity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Reproduces the reference rankings, see [`distance`]
    #[default]
    Reference,
    /// Conventional planar distance, see [`euclidean_distance`]
    Euclidean,
}

impl DistanceMetric {
    pub fn measure(&self, p1: Coordinates, p2: Coordinates) -> f64 {
        match self {
            DistanceMetric::Reference => distance(p1, p2),
            DistanceMetric::Euclidean => euclidean_distance(p1, p2),
        }
    }
}
