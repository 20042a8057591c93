//! Shared test utilities and fixtures for station registry tests

use crate::app::models::{Coordinates, Station};
use std::fs;
use std::path::{Path, PathBuf};

pub mod loader_tests;

/// Header row used by the Sevici snapshot export
pub const TEST_HEADER: &str = "nombre,bornetas,bornetas_vacias,bicis_disponibles,latitud,longitud";

/// Create a test station with standard dock counts
pub fn create_test_station(name: &str, available_bikes: i64, lat: f64, lon: f64) -> Station {
    Station::new(
        name,
        20,
        20 - available_bikes,
        available_bikes,
        Coordinates::new(lat, lon),
    )
}

/// The three-station example: two stations with bikes and one empty
pub fn create_example_stations() -> Vec<Station> {
    vec![
        Station::new("Plaza", 20, 5, 15, Coordinates::new(37.38, -5.98)),
        Station::new("Torre", 18, 2, 16, Coordinates::new(37.39, -6.00)),
        Station::new("Rio", 10, 10, 0, Coordinates::new(37.40, -5.99)),
    ]
}

/// A small slice of the Seville network with varied availability
pub fn create_city_stations() -> Vec<Station> {
    vec![
        create_test_station("001_AVENIDA DE LA CONSTITUCION", 12, 37.386, -5.993),
        create_test_station("002_PLAZA NUEVA", 0, 37.388, -5.996),
        create_test_station("003_TORRE DEL ORO", 7, 37.382, -5.996),
        create_test_station("004_PUERTA DE JEREZ", 7, 37.380, -5.993),
        create_test_station("005_ALAMEDA", 3, 37.399, -5.994),
        create_test_station("006_MACARENA", 1, 37.405, -5.989),
        create_test_station("007_TRIANA", 15, 37.384, -6.003),
        create_test_station("008_NERVION", 0, 37.383, -5.973),
        create_test_station("009_REMEDIOS", 9, 37.372, -6.000),
        create_test_station("010_PARQUE MARIA LUISA", 5, 37.375, -5.989),
    ]
}

/// Render stations as snapshot CSV text including the header row
pub fn snapshot_csv(stations: &[Station]) -> String {
    let mut content = format!("{}\n", TEST_HEADER);
    for station in stations {
        content.push_str(&format!(
            "{},{},{},{},{},{}\n",
            station.name,
            station.total_docks,
            station.empty_docks,
            station.available_bikes,
            station.location.latitude,
            station.location.longitude
        ));
    }
    content
}

/// Write a snapshot file with the given raw content
pub fn create_test_snapshot_file(
    dir: &Path,
    filename: &str,
    content: &str,
) -> std::io::Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Assert that two stations are functionally equivalent
pub fn assert_stations_equal(actual: &Station, expected: &Station) {
    assert_eq!(actual.name, expected.name);
    assert_eq!(actual.total_docks, expected.total_docks);
    assert_eq!(actual.empty_docks, expected.empty_docks);
    assert_eq!(actual.available_bikes, expected.available_bikes);
    assert!((actual.location.latitude - expected.location.latitude).abs() < 1e-9);
    assert!((actual.location.longitude - expected.location.longitude).abs() < 1e-9);
}
