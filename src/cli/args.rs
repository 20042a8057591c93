//! Command-line argument definitions for the Sevici station tools
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::Coordinates;
use crate::app::services::station_registry::distance::DistanceMetric;
use crate::app::services::station_registry::query::ResultLimit;
use crate::config::QueryConfig;
use crate::constants::DEFAULT_STATIONS_PATH;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Sevici station tools
///
/// Loads a bike-share station snapshot and ranks stations by available
/// bikes or by distance to a point.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sevici",
    version,
    about = "Rank Sevici bike-share stations by availability and proximity",
    long_about = "Loads a bike-share station snapshot (CSV with one header row and the columns \
                  name, total docks, empty docks, available bikes, latitude, longitude) and \
                  answers two questions: which stations have at least N bikes, and which \
                  stations with bikes are closest to a point."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summarise the snapshot and list its first and last stations
    Stations(StationsArgs),
    /// Stations with at least N available bikes, most bikes first
    Available(AvailableArgs),
    /// Stations with bikes closest to a point, nearest first
    Nearest(NearestArgs),
}

/// Options shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Station snapshot to load
    #[arg(
        short = 'i',
        long = "input",
        value_name = "CSV",
        default_value = DEFAULT_STATIONS_PATH,
        help = "Station snapshot CSV file"
    )]
    pub input_path: PathBuf,

    /// Path to a JSON query configuration file
    ///
    /// Values given on the command line override the file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to query configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the available command
#[derive(Debug, Clone, Parser)]
pub struct AvailableArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Minimum number of available bikes (default 5)
    #[arg(
        short = 'k',
        long = "min-bikes",
        value_name = "N",
        allow_negative_numbers = true,
        help = "Minimum number of available bikes"
    )]
    pub min_bikes: Option<i64>,
}

/// Arguments for the nearest command
#[derive(Debug, Clone, Parser)]
pub struct NearestArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Latitude of the reference point (requires --lon)
    #[arg(long = "lat", value_name = "DEG", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude of the reference point (requires --lat)
    #[arg(long = "lon", value_name = "DEG", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Requested number of stations
    ///
    /// Without --clamp, N + 1 stations are returned and the command fails
    /// if fewer stations have bikes.
    #[arg(
        short = 'k',
        long = "count",
        value_name = "N",
        help = "Requested number of nearest stations"
    )]
    pub count: Option<usize>,

    /// Distance formula
    #[arg(long = "metric", value_enum, help = "Distance formula used for ranking")]
    pub metric: Option<MetricArg>,

    /// Return at most N stations instead of N + 1
    #[arg(long = "clamp", help = "Return at most N stations, fewer if not enough have bikes")]
    pub clamp: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Distance formula choices on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Formula used by the published rankings
    Reference,
    /// Conventional planar distance
    Euclidean,
}

impl From<MetricArg> for DistanceMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Reference => DistanceMetric::Reference,
            MetricArg::Euclidean => DistanceMetric::Euclidean,
        }
    }
}

impl Commands {
    /// Options shared by every subcommand
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Stations(args) => &args.common,
            Commands::Available(args) => &args.common,
            Commands::Nearest(args) => &args.common,
        }
    }
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Configuration from the config file, or the defaults
    pub fn base_config(&self) -> Result<QueryConfig> {
        match &self.config_file {
            Some(path) => QueryConfig::from_file(path),
            None => Ok(QueryConfig::default()),
        }
    }
}

impl AvailableArgs {
    /// Build the effective configuration
    pub fn resolve_config(&self) -> Result<QueryConfig> {
        let mut config = self.common.base_config()?;
        if let Some(min_bikes) = self.min_bikes {
            config.min_bikes = min_bikes;
        }
        Ok(config)
    }
}

impl NearestArgs {
    /// Validate the nearest command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        match (self.latitude, self.longitude) {
            (Some(_), None) | (None, Some(_)) => Err(Error::configuration(
                "--lat and --lon must be given together",
            )),
            _ => Ok(()),
        }
    }

    /// Build the effective configuration
    pub fn resolve_config(&self) -> Result<QueryConfig> {
        self.validate()?;

        let mut config = self.common.base_config()?;
        if let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) {
            config.reference_point = Coordinates::new(latitude, longitude);
        }
        if let Some(count) = self.count {
            config.nearest_count = count;
        }
        if let Some(metric) = self.metric {
            config.metric = metric.into();
        }
        if self.clamp {
            config.limit = ResultLimit::Clamped;
        }

        config.validate()?;
        Ok(config)
    }
}
