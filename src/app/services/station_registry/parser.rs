//! Station record parsing from CSV rows
//!
//! Converts one data row of the snapshot into a [`Station`]. Only type
//! conversion happens here; values are not range-checked.

use crate::app::models::{Coordinates, Station};
use crate::constants::{STATION_FIELD_COUNT, columns};
use crate::{Error, Result};
use csv::StringRecord;
use std::str::FromStr;

/// Parse a single data row into a station
///
/// The row must hold exactly six fields in the order
/// `name, total_docks, empty_docks, available_bikes, latitude, longitude`.
/// `line` is only used for error reporting.
pub fn parse_station_record(record: &StringRecord, line: u64) -> Result<Station> {
    if record.len() != STATION_FIELD_COUNT {
        return Err(Error::malformed_record(
            line,
            format!(
                "expected {} fields, found {}",
                STATION_FIELD_COUNT,
                record.len()
            ),
        ));
    }

    let name = record.get(0).unwrap_or_default().to_string();
    let total_docks: i64 = parse_field(record, 1, columns::TOTAL_DOCKS, line)?;
    let empty_docks: i64 = parse_field(record, 2, columns::EMPTY_DOCKS, line)?;
    let available_bikes: i64 = parse_field(record, 3, columns::AVAILABLE_BIKES, line)?;
    let latitude: f64 = parse_field(record, 4, columns::LATITUDE, line)?;
    let longitude: f64 = parse_field(record, 5, columns::LONGITUDE, line)?;

    Ok(Station::new(
        name,
        total_docks,
        empty_docks,
        available_bikes,
        Coordinates::new(latitude, longitude),
    ))
}

/// Parse a numeric field, ignoring surrounding whitespace
fn parse_field<T: FromStr>(
    record: &StringRecord,
    index: usize,
    column: &str,
    line: u64,
) -> Result<T> {
    let raw = record
        .get(index)
        .ok_or_else(|| Error::malformed_record(line, format!("missing field '{}'", column)))?;

    raw.trim()
        .parse()
        .map_err(|_| Error::malformed_record(line, format!("invalid {} '{}'", column, raw)))
}
