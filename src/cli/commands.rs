//! Command implementations for the Sevici station CLI
//!
//! Each command loads the snapshot, runs one query and renders the result in
//! the requested format. Rendering returns strings so it can be tested
//! without capturing stdout.

use crate::app::models::{AvailabilityEntry, ProximityEntry, Station};
use crate::app::services::station_registry::{LoadStats, StationRegistry};
use crate::cli::args::{
    Args, AvailableArgs, CommonArgs, Commands, NearestArgs, OutputFormat, StationsArgs,
};
use crate::constants::{LISTING_PREVIEW_COUNT, columns};
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Statistics for a completed command
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Number of stations loaded from the snapshot
    pub stations_loaded: usize,
    /// Number of result rows produced
    pub results: usize,
    /// Total command time
    pub processing_time: std::time::Duration,
}

/// Main command runner
///
/// Sets up logging, dispatches to the subcommand and prints its output.
pub fn run(args: Args) -> Result<CommandStats> {
    let command = args
        .command
        .ok_or_else(|| Error::configuration("No command given"))?;

    setup_logging(command.common())?;
    debug!("Command line arguments: {:?}", command);

    match command {
        Commands::Stations(args) => run_stations(args),
        Commands::Available(args) => run_available(args),
        Commands::Nearest(args) => run_nearest(args),
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sevici={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))
}

fn load_registry(args: &CommonArgs) -> Result<(StationRegistry, LoadStats)> {
    info!("Loading stations from {}", args.input_path.display());
    StationRegistry::load(&args.input_path)
}

/// Summarise the snapshot and preview its first and last stations
pub fn run_stations(args: StationsArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    let (registry, load_stats) = load_registry(&args.common)?;

    let output = render_stations(&registry, &load_stats, args.common.output_format)?;
    println!("{}", output);

    Ok(CommandStats {
        stations_loaded: registry.station_count(),
        results: registry.station_count(),
        processing_time: start_time.elapsed(),
    })
}

/// Rank stations by available bikes
pub fn run_available(args: AvailableArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    let config = args.resolve_config()?;
    let (registry, _) = load_registry(&args.common)?;

    let entries = registry.available_with_config(&config);
    info!(
        "{} stations with at least {} bikes",
        entries.len(),
        config.min_bikes
    );

    println!(
        "{}",
        render_availability(&entries, args.common.output_format)?
    );

    Ok(CommandStats {
        stations_loaded: registry.station_count(),
        results: entries.len(),
        processing_time: start_time.elapsed(),
    })
}

/// Rank stations with bikes by distance to the reference point
pub fn run_nearest(args: NearestArgs) -> Result<CommandStats> {
    let start_time = Instant::now();
    let config = args.resolve_config()?;
    let (registry, _) = load_registry(&args.common)?;

    let entries = registry.nearest_with_config(&config)?;
    info!(
        "{} stations nearest to {}",
        entries.len(),
        config.reference_point
    );

    println!("{}", render_proximity(&entries, args.common.output_format)?);

    Ok(CommandStats {
        stations_loaded: registry.station_count(),
        results: entries.len(),
        processing_time: start_time.elapsed(),
    })
}

/// Render the station summary report
pub fn render_stations(
    registry: &StationRegistry,
    load_stats: &LoadStats,
    format: OutputFormat,
) -> Result<String> {
    let stations = registry.stations();
    let head = &stations[..stations.len().min(LISTING_PREVIEW_COUNT)];
    let tail = &stations[stations.len().saturating_sub(LISTING_PREVIEW_COUNT)..];

    match format {
        OutputFormat::Human => {
            let metadata = registry.metadata();
            let mut output = format!(
                "{}\n\
                 Source: {}\n\
                 Stations: {} ({} with bikes, {:.1}%)\n\
                 Available bikes: {} of {} docks\n\
                 {}\n",
                "Sevici Station Snapshot".bright_green().bold(),
                metadata.source,
                metadata.station_count,
                metadata.stations_with_bikes,
                metadata.coverage_percent(),
                metadata.total_available_bikes,
                metadata.total_docks,
                load_stats.summary(),
            );

            output.push_str(&format!("\n{}\n", "First stations:".bright_white()));
            for station in head {
                output.push_str(&format_station_line(station));
            }
            output.push_str(&format!("\n{}\n", "Last stations:".bright_white()));
            for station in tail {
                output.push_str(&format_station_line(station));
            }
            Ok(output)
        }
        OutputFormat::Json => to_json(&serde_json::json!({
            "source": registry.metadata().source,
            "load": load_stats,
            "first": head,
            "last": tail,
        })),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            write_csv_row(&mut writer, columns::ALL)?;
            for station in stations {
                write_csv_row(
                    &mut writer,
                    [
                        station.name.clone(),
                        station.total_docks.to_string(),
                        station.empty_docks.to_string(),
                        station.available_bikes.to_string(),
                        station.location.latitude.to_string(),
                        station.location.longitude.to_string(),
                    ],
                )?;
            }
            finish_csv(writer)
        }
    }
}

/// Render an availability ranking
pub fn render_availability(entries: &[AvailabilityEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => {
            if entries.is_empty() {
                return Ok("No stations match".yellow().to_string());
            }
            let mut output = String::new();
            for entry in entries {
                output.push_str(&format!(
                    "{:>4}  {}  {}\n",
                    entry.available_bikes.to_string().bright_yellow().bold(),
                    entry.name.bright_cyan(),
                    entry.location.to_string().bright_black()
                ));
            }
            Ok(output.trim_end().to_string())
        }
        OutputFormat::Json => to_json(entries),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            write_csv_row(
                &mut writer,
                [
                    columns::AVAILABLE_BIKES,
                    columns::NAME,
                    columns::LATITUDE,
                    columns::LONGITUDE,
                ],
            )?;
            for entry in entries {
                write_csv_row(
                    &mut writer,
                    [
                        entry.available_bikes.to_string(),
                        entry.name.clone(),
                        entry.location.latitude.to_string(),
                        entry.location.longitude.to_string(),
                    ],
                )?;
            }
            finish_csv(writer)
        }
    }
}

/// Render a proximity ranking
pub fn render_proximity(entries: &[ProximityEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => {
            if entries.is_empty() {
                return Ok("No stations match".yellow().to_string());
            }
            let mut output = String::new();
            for (rank, entry) in entries.iter().enumerate() {
                output.push_str(&format!(
                    "{:>3}. {:.6}  {}  ({} bikes)\n",
                    rank + 1,
                    entry.distance,
                    entry.name.bright_cyan(),
                    entry.available_bikes
                ));
            }
            Ok(output.trim_end().to_string())
        }
        OutputFormat::Json => to_json(entries),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            write_csv_row(&mut writer, ["distance", columns::NAME, columns::AVAILABLE_BIKES])?;
            for entry in entries {
                write_csv_row(
                    &mut writer,
                    [
                        entry.distance.to_string(),
                        entry.name.clone(),
                        entry.available_bikes.to_string(),
                    ],
                )?;
            }
            finish_csv(writer)
        }
    }
}

fn format_station_line(station: &Station) -> String {
    format!(
        "  {}  docks {}/{} empty, {} bikes  {}\n",
        station.name.bright_cyan(),
        station.empty_docks,
        station.total_docks,
        station.available_bikes,
        station.location.to_string().bright_black()
    )
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::output(format!("Failed to serialize JSON output: {}", e)))
}

fn write_csv_row<I, T>(writer: &mut csv::Writer<Vec<u8>>, row: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    writer
        .write_record(row)
        .map_err(|e| Error::output(format!("Failed to write CSV output: {}", e)))
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::output(format!("Failed to write CSV output: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::output(format!("CSV output is not UTF-8: {}", e)))?;
    Ok(text.trim_end().to_string())
}
