//! Station snapshot loading
//!
//! This module reads a station snapshot (one header row followed by data rows)
//! from a file or any reader. Loading is all-or-nothing: the first malformed
//! row aborts the load.

use super::StationRegistry;
use super::metadata::LoadStats;
use super::parser::parse_station_record;
use crate::app::models::Station;
use crate::constants::STATION_FIELD_COUNT;
use crate::{Error, Result};
use csv::{Position, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Load all stations from a snapshot file
///
/// The file is re-read on every call; nothing is cached.
///
/// # Errors
/// * Returns `Error::SourceUnavailable` if the file cannot be opened or read
/// * Returns `Error::MalformedRecord` for a missing header, a row without
///   exactly six fields, or a numeric field that fails conversion
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    debug!("Opening station snapshot: {}", source_name);

    let file = File::open(path).map_err(|e| Error::source_unavailable(&source_name, e))?;
    read_stations(file, &source_name)
}

/// Read all stations from any reader holding snapshot CSV text
///
/// `source_name` is used in error messages and logs.
///
/// The first physical line is the header and is skipped whatever it holds,
/// even when blank. Any later blank line is a record with no fields and
/// aborts the load.
pub fn read_stations<R: Read>(mut reader: R, source_name: &str) -> Result<Vec<Station>> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| Error::source_unavailable(source_name, e))?;

    if data.is_empty() {
        return Err(Error::malformed_record(1, "missing header row"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());
    let mut record = StringRecord::new();
    let mut lines = LineCounter::new(&data);

    // Offset where the next record should begin
    let mut next_start = match blank_line_end(&data, 0) {
        Some(after_header) => after_header,
        None => {
            reader
                .read_record(&mut record)
                .map_err(|e| Error::from_csv(source_name, e))?;
            byte_offset(reader.position())
        }
    };

    let mut stations = Vec::new();
    loop {
        if blank_line_end(&data, next_start).is_some() {
            let line = lines.line_at(record_start(&data, next_start));
            return Err(Error::malformed_record(
                line,
                format!("expected {} fields, found 0", STATION_FIELD_COUNT),
            ));
        }

        if !reader
            .read_record(&mut record)
            .map_err(|e| Error::from_csv(source_name, e))?
        {
            break;
        }

        let line = lines.line_at(record_start(&data, next_start));
        stations.push(parse_station_record(&record, line)?);
        next_start = byte_offset(reader.position());
    }

    debug!("Read {} stations from {}", stations.len(), source_name);
    Ok(stations)
}

fn byte_offset(position: &Position) -> usize {
    usize::try_from(position.byte()).unwrap_or(usize::MAX)
}

/// Skip the `\n` of a CRLF terminator the reader stopped in the middle of
fn record_start(data: &[u8], offset: usize) -> usize {
    match (offset.checked_sub(1).and_then(|i| data.get(i)), data.get(offset)) {
        (Some(b'\r'), Some(b'\n')) => offset + 1,
        _ => offset,
    }
}

/// If a blank line starts at `offset`, the offset just past its terminator
fn blank_line_end(data: &[u8], offset: usize) -> Option<usize> {
    let start = record_start(data, offset);
    match data.get(start..)? {
        [b'\r', b'\n', ..] => Some(start + 2),
        [b'\r' | b'\n', ..] => Some(start + 1),
        _ => None,
    }
}

/// Maps byte offsets to 1-based line numbers; offsets must not decrease
struct LineCounter<'a> {
    data: &'a [u8],
    offset: usize,
    line: u64,
}

impl<'a> LineCounter<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, offset: usize) -> u64 {
        let end = offset.clamp(self.offset, self.data.len());
        self.line += self.data[self.offset..end]
            .iter()
            .filter(|&&byte| byte == b'\n')
            .count() as u64;
        self.offset = end;
        self.line
    }
}

impl StationRegistry {
    /// Load a registry from a snapshot file
    ///
    /// # Returns
    /// * `Result<(StationRegistry, LoadStats)>` - Registry and loading statistics
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, LoadStats)> {
        let path = path.as_ref();
        let start_time = Instant::now();

        let stations = load_stations(path)?;

        let stats = LoadStats {
            records_read: stations.len(),
            stations_loaded: stations.len(),
            load_duration: start_time.elapsed(),
        };

        info!(
            "Station registry loaded from '{}': {}",
            path.display(),
            stats.summary()
        );

        let mut registry = Self::from_stations(path.display().to_string(), stations);
        registry.load_time = start_time;

        Ok((registry, stats))
    }
}
