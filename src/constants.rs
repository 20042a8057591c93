//! Application constants for the Sevici station tools
//!
//! Default query parameters, the expected CSV layout and the reference
//! point used by the command-line harness.

// =============================================================================
// Query Defaults
// =============================================================================

/// Default minimum number of available bikes for the availability filter
pub const DEFAULT_MIN_BIKES: i64 = 5;

/// Default number of nearest stations requested from the proximity finder
pub const DEFAULT_NEAREST_COUNT: usize = 5;

/// Bike threshold that makes a station a proximity candidate
pub const CANDIDATE_MIN_BIKES: i64 = 1;

// =============================================================================
// Input Layout
// =============================================================================

/// Default location of the station snapshot
pub const DEFAULT_STATIONS_PATH: &str = "./data/estaciones.csv";

/// Column names of the station CSV, in file order
pub mod columns {
    pub const NAME: &str = "name";
    pub const TOTAL_DOCKS: &str = "total_docks";
    pub const EMPTY_DOCKS: &str = "empty_docks";
    pub const AVAILABLE_BIKES: &str = "available_bikes";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";

    pub const ALL: &[&str] = &[
        NAME,
        TOTAL_DOCKS,
        EMPTY_DOCKS,
        AVAILABLE_BIKES,
        LATITUDE,
        LONGITUDE,
    ];
}

/// Number of text columns in every data row
pub const STATION_FIELD_COUNT: usize = columns::ALL.len();

// =============================================================================
// Harness Defaults
// =============================================================================

/// Reference latitude used when no point is given (central Seville)
pub const DEFAULT_REFERENCE_LATITUDE: f64 = 37.357659;

/// Reference longitude used when no point is given (central Seville)
pub const DEFAULT_REFERENCE_LONGITUDE: f64 = -5.9863;

/// Number of stations shown at each end of a station listing
pub const LISTING_PREVIEW_COUNT: usize = 5;
