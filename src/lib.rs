//! Sevici Station Library
//!
//! A Rust library for loading bike-share station snapshots (Seville's Sevici
//! network) from CSV and answering ranking queries over them.
//!
//! This library provides tools for:
//! - Loading station records from a comma-separated file with a single header row
//! - Selecting stations with at least a given number of available bikes
//! - Finding the stations with bikes closest to a reference point
//! - Error reporting that separates unreadable sources, malformed rows and short result sets

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod station_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AvailabilityEntry, Coordinates, ProximityEntry, Station};
pub use app::services::station_registry::StationRegistry;
pub use app::services::station_registry::distance::{DistanceMetric, distance};
pub use app::services::station_registry::loader::{load_stations, read_stations};
pub use app::services::station_registry::query::{
    ResultLimit, nearest_stations, nearest_stations_with, stations_with_min_bikes,
};
pub use config::QueryConfig;

/// Result type alias for station operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading and querying stations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The data source could not be opened or read
    #[error("Station source unavailable: {path}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A data row has the wrong number of fields or a field failed conversion
    #[error("Malformed station record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// More ranked results were requested than candidate stations exist
    #[error("Requested {requested} stations but only {available} have bikes available")]
    OutOfRange { requested: usize, available: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Rendering command output failed
    #[error("Output error: {message}")]
    Output { message: String },
}

impl Error {
    /// Create a source unavailable error for the given path
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed_record(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(requested: usize, available: usize) -> Self {
        Self::OutOfRange {
            requested,
            available,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Attach the source name to a CSV reader failure
    ///
    /// I/O failures while reading become `SourceUnavailable`; anything else the
    /// reader rejects (invalid UTF-8, unequal row lengths) is a malformed record.
    pub fn from_csv(source_name: &str, error: csv::Error) -> Self {
        let line = error
            .position()
            .map(|position| position.line())
            .unwrap_or(0);

        match error.into_kind() {
            csv::ErrorKind::Io(io_error) => Self::source_unavailable(source_name, io_error),
            csv::ErrorKind::Utf8 { err, .. } => {
                Self::malformed_record(line, format!("invalid UTF-8: {}", err))
            }
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => Self::malformed_record(
                line,
                format!("expected {} fields, found {}", expected_len, len),
            ),
            other => Self::malformed_record(line, format!("{:?}", other)),
        }
    }
}
