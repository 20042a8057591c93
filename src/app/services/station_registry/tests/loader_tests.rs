//! Tests for station snapshot loading functionality

use super::*;
use crate::Error;
use crate::app::services::station_registry::StationRegistry;
use crate::app::services::station_registry::loader::{load_stations, read_stations};
use tempfile::TempDir;

#[test]
fn test_station_registry_from_empty_list() {
    let registry = StationRegistry::from_stations("memory", Vec::new());

    assert_eq!(registry.source, "memory");
    assert_eq!(registry.station_count(), 0);
    assert!(registry.stations().is_empty());
}

#[test]
fn test_load_stations_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let expected = create_example_stations();
    let path =
        create_test_snapshot_file(temp_dir.path(), "estaciones.csv", &snapshot_csv(&expected))
            .unwrap();

    let stations = load_stations(&path).unwrap();

    assert_eq!(stations.len(), 3);
    for (actual, expected) in stations.iter().zip(expected.iter()) {
        assert_stations_equal(actual, expected);
    }
}

#[test]
fn test_load_stations_preserves_source_order() {
    let temp_dir = TempDir::new().unwrap();
    let expected = create_city_stations();
    let path =
        create_test_snapshot_file(temp_dir.path(), "city.csv", &snapshot_csv(&expected)).unwrap();

    let names: Vec<String> = load_stations(&path)
        .unwrap()
        .into_iter()
        .map(|station| station.name)
        .collect();
    let expected_names: Vec<String> = expected.into_iter().map(|station| station.name).collect();

    assert_eq!(names, expected_names);
}

#[test]
fn test_load_stations_nonexistent_path() {
    let result = load_stations("/nonexistent/path/estaciones.csv");

    match result {
        Err(Error::SourceUnavailable { path, source }) => {
            assert!(path.contains("estaciones.csv"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected SourceUnavailable, got {:?}", other),
    }
}

#[test]
fn test_load_stations_reads_fresh_each_call() {
    let temp_dir = TempDir::new().unwrap();
    let stations = create_example_stations();
    let path =
        create_test_snapshot_file(temp_dir.path(), "live.csv", &snapshot_csv(&stations[..1]))
            .unwrap();

    assert_eq!(load_stations(&path).unwrap().len(), 1);

    std::fs::write(&path, snapshot_csv(&stations)).unwrap();
    assert_eq!(load_stations(&path).unwrap().len(), 3);
}

#[test]
fn test_read_stations_header_only() {
    let content = format!("{}\n", TEST_HEADER);
    let stations = read_stations(content.as_bytes(), "header-only").unwrap();
    assert!(stations.is_empty());
}

#[test]
fn test_read_stations_empty_source() {
    let result = read_stations("".as_bytes(), "empty");
    assert!(matches!(result, Err(Error::MalformedRecord { line: 1, .. })));
}

#[test]
fn test_read_stations_header_is_not_parsed() {
    // Whatever the first row holds, it is skipped
    let content = "A,10,3,7,37.1,-5.9\nB,11,4,6,37.2,-5.8\n";
    let stations = read_stations(content.as_bytes(), "no-header").unwrap();

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "B");
}

#[test]
fn test_read_stations_blank_header_line() {
    // A blank first line stands in for the header; the next line is data
    let content = "\nA,10,3,7,37.1,-5.9\nB,11,4,6,37.2,-5.8\n";
    let stations = read_stations(content.as_bytes(), "blank-header").unwrap();

    assert_eq!(stations.len(), 2);
    assert_eq!(stations[0].name, "A");
    assert_eq!(stations[1].name, "B");
}

#[test]
fn test_read_stations_blank_header_line_reports_data_lines() {
    let content = "\nA,10,3,7,37.1,-5.9\nB,11,4\n";

    match read_stations(content.as_bytes(), "blank-header") {
        Err(Error::MalformedRecord { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("found 3"));
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_read_stations_blank_line_between_rows_aborts_load() {
    let content = format!(
        "{}\nA,10,3,7,37.1,-5.9\n\nB,11,4,6,37.2,-5.8\n",
        TEST_HEADER
    );

    match read_stations(content.as_bytes(), "blank-row") {
        Err(Error::MalformedRecord { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("found 0"));
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_read_stations_blank_line_after_header_aborts_load() {
    let content = format!("{}\n\nA,10,3,7,37.1,-5.9\n", TEST_HEADER);

    let result = read_stations(content.as_bytes(), "blank-row");
    assert!(matches!(result, Err(Error::MalformedRecord { line: 2, .. })));
}

#[test]
fn test_read_stations_trailing_blank_line_aborts_load() {
    let content = format!("{}\nA,10,3,7,37.1,-5.9\n\n", TEST_HEADER);

    let result = read_stations(content.as_bytes(), "trailing-blank");
    assert!(matches!(result, Err(Error::MalformedRecord { line: 3, .. })));
}

#[test]
fn test_read_stations_crlf_line_endings() {
    let content = format!(
        "{}\r\nA,10,3,7,37.1,-5.9\r\nB,11,4,6,37.2,-5.8\r\n",
        TEST_HEADER
    );
    let stations = read_stations(content.as_bytes(), "crlf").unwrap();
    assert_eq!(stations.len(), 2);
    assert_eq!(stations[1].name, "B");

    let blank = format!(
        "{}\r\nA,10,3,7,37.1,-5.9\r\n\r\nB,11,4,6,37.2,-5.8\r\n",
        TEST_HEADER
    );
    let result = read_stations(blank.as_bytes(), "crlf-blank");
    assert!(matches!(result, Err(Error::MalformedRecord { line: 3, .. })));
}

#[test]
fn test_read_stations_multiline_name_keeps_line_numbers() {
    let content = format!(
        "{}\n\"Plaza\nNueva\",20,5,15,37.38,-5.98\nB,11,4\n",
        TEST_HEADER
    );

    match read_stations(content.as_bytes(), "multiline") {
        Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_read_stations_short_row_aborts_load() {
    let content = format!(
        "{}\nA,10,3,7,37.1,-5.9\nB,10,3,7\nC,10,3,7,37.1,-5.9\n",
        TEST_HEADER
    );

    match read_stations(content.as_bytes(), "short-row") {
        Err(Error::MalformedRecord { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("found 4"));
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_read_stations_bad_number_aborts_load() {
    let content = format!("{}\nA,10,3,many,37.1,-5.9\n", TEST_HEADER);

    let result = read_stations(content.as_bytes(), "bad-number");
    assert!(matches!(result, Err(Error::MalformedRecord { line: 2, .. })));
}

#[test]
fn test_read_stations_quoted_name_with_comma() {
    let content = format!("{}\n\"Plaza, Nueva\",20,5,15,37.38,-5.98\n", TEST_HEADER);

    let stations = read_stations(content.as_bytes(), "quoted").unwrap();
    assert_eq!(stations[0].name, "Plaza, Nueva");
    assert_eq!(stations[0].available_bikes, 15);
}

#[test]
fn test_registry_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_snapshot_file(
        temp_dir.path(),
        "estaciones.csv",
        &snapshot_csv(&create_city_stations()),
    )
    .unwrap();

    let (registry, stats) = StationRegistry::load(&path).unwrap();

    assert_eq!(registry.station_count(), 10);
    assert_eq!(stats.records_read, 10);
    assert_eq!(stats.stations_loaded, 10);
    assert!(registry.source.ends_with("estaciones.csv"));
}

#[test]
fn test_registry_load_nonexistent_path() {
    let result = StationRegistry::load("/nonexistent/path.csv");
    assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
}
