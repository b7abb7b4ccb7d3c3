//! Loads the station and measurement CSV files into a [`DatasetSnapshot`].
//!
//! The on-disk files keep the column names of the source dataset (`station`,
//! `prcp`, `tobs`); the raw rows are mapped into the crate's own types here,
//! so the rest of the crate never sees the persisted shape.

use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;

use crate::dataset::error::DatasetError;
use crate::dataset::snapshot::DatasetSnapshot;
use crate::types::measurement::Measurement;
use crate::types::station::Station;

/// Raw station row as it appears in the stations CSV.
#[derive(Debug, Deserialize)]
struct StationRecord {
    station: String,
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

/// Raw measurement row as it appears in the measurements CSV. Empty `prcp`
/// and `tobs` fields deserialize to `None`.
#[derive(Debug, Deserialize)]
struct MeasurementRecord {
    station: String,
    date: NaiveDate,
    prcp: Option<f64>,
    tobs: Option<f64>,
}

/// Reads both CSV files and assembles the immutable [`DatasetSnapshot`].
///
/// This is the only write phase of the process; it runs to completion before
/// the server accepts queries. Any malformed row or dangling station
/// reference fails the whole load.
pub fn load_snapshot(
    stations_path: &Path,
    measurements_path: &Path,
) -> Result<DatasetSnapshot, DatasetError> {
    let stations = read_stations(stations_path)?;
    let measurements = read_measurements(measurements_path)?;
    debug!(
        "read {} stations from {} and {} measurements from {}",
        stations.len(),
        stations_path.display(),
        measurements.len(),
        measurements_path.display()
    );
    DatasetSnapshot::new(stations, measurements)
}

fn read_stations(path: &Path) -> Result<Vec<Station>, DatasetError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| DatasetError::Open(path.to_path_buf(), e))?;
    let mut stations = Vec::new();
    for record in reader.deserialize() {
        let record: StationRecord =
            record.map_err(|e| DatasetError::Parse(path.to_path_buf(), e))?;
        stations.push(Station {
            id: record.station,
            name: record.name,
            latitude: record.latitude,
            longitude: record.longitude,
            elevation: record.elevation,
        });
    }
    Ok(stations)
}

fn read_measurements(path: &Path) -> Result<Vec<Measurement>, DatasetError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| DatasetError::Open(path.to_path_buf(), e))?;
    let mut measurements = Vec::new();
    for record in reader.deserialize() {
        let record: MeasurementRecord =
            record.map_err(|e| DatasetError::Parse(path.to_path_buf(), e))?;
        measurements.push(Measurement {
            station_id: record.station,
            date: record.date,
            precipitation: record.prcp,
            temperature_observation: record.tobs,
        });
    }
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const STATIONS_CSV: &str = "\
station,name,latitude,longitude,elevation
USC00519397,\"WAIKIKI 717.2, HI US\",21.2716,-157.8168,3.0
USC00519281,\"WAIHEE 837.5, HI US\",21.45167,-157.84889,32.9
";

    const MEASUREMENTS_CSV: &str = "\
station,date,prcp,tobs
USC00519397,2017-08-22,0.0,79.0
USC00519397,2017-08-23,,81.0
USC00519281,2017-08-23,0.45,
";

    fn write_dataset(dir: &TempDir, stations: &str, measurements: &str) -> (std::path::PathBuf, std::path::PathBuf) {
        let stations_path = dir.path().join("stations.csv");
        let measurements_path = dir.path().join("measurements.csv");
        fs::write(&stations_path, stations).unwrap();
        fs::write(&measurements_path, measurements).unwrap();
        (stations_path, measurements_path)
    }

    #[test]
    fn loads_stations_and_measurements() {
        let dir = TempDir::new().unwrap();
        let (stations_path, measurements_path) =
            write_dataset(&dir, STATIONS_CSV, MEASUREMENTS_CSV);

        let snapshot = load_snapshot(&stations_path, &measurements_path).unwrap();

        assert_eq!(snapshot.stations().len(), 2);
        assert_eq!(snapshot.stations()[0].id, "USC00519397");
        assert_eq!(snapshot.stations()[0].name, "WAIKIKI 717.2, HI US");
        assert_eq!(snapshot.measurements().len(), 3);
    }

    #[test]
    fn empty_fields_become_absent_values() {
        let dir = TempDir::new().unwrap();
        let (stations_path, measurements_path) =
            write_dataset(&dir, STATIONS_CSV, MEASUREMENTS_CSV);

        let snapshot = load_snapshot(&stations_path, &measurements_path).unwrap();

        let second = &snapshot.measurements()[1];
        assert_eq!(second.precipitation, None);
        assert_eq!(second.temperature_observation, Some(81.0));

        let third = &snapshot.measurements()[2];
        assert_eq!(third.precipitation, Some(0.45));
        assert_eq!(third.temperature_observation, None);
    }

    #[test]
    fn malformed_date_fails_the_load() {
        let dir = TempDir::new().unwrap();
        let bad = "station,date,prcp,tobs\nUSC00519397,22-08-2017,0.0,79.0\n";
        let (stations_path, measurements_path) = write_dataset(&dir, STATIONS_CSV, bad);

        let result = load_snapshot(&stations_path, &measurements_path);

        assert!(matches!(result, Err(DatasetError::Parse(..))));
    }

    #[test]
    fn missing_file_fails_the_load() {
        let dir = TempDir::new().unwrap();
        let (stations_path, _) = write_dataset(&dir, STATIONS_CSV, MEASUREMENTS_CSV);

        let result = load_snapshot(&stations_path, &dir.path().join("nope.csv"));

        assert!(matches!(result, Err(DatasetError::Open(..))));
    }

    #[test]
    fn dangling_station_reference_fails_the_load() {
        let dir = TempDir::new().unwrap();
        let orphan = "station,date,prcp,tobs\nUSC00000000,2017-08-22,0.0,79.0\n";
        let (stations_path, measurements_path) = write_dataset(&dir, STATIONS_CSV, orphan);

        let result = load_snapshot(&stations_path, &measurements_path);

        assert!(matches!(
            result,
            Err(DatasetError::UnknownStation { .. })
        ));
    }
}
