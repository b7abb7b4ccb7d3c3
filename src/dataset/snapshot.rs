//! The immutable in-memory dataset shared by every query.

use std::collections::HashSet;

use crate::dataset::error::DatasetError;
use crate::types::measurement::Measurement;
use crate::types::station::Station;

/// All station and measurement records of the dataset, loaded once before
/// serving begins.
///
/// A snapshot is constructed by [`load_snapshot`](crate::load_snapshot) and
/// handed to the server behind an `Arc`. Nothing mutates it afterwards, so
/// any number of queries may scan it concurrently without coordination.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSnapshot {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
}

impl DatasetSnapshot {
    /// Builds a snapshot from loaded records, verifying that every
    /// measurement references a known station.
    pub fn new(
        stations: Vec<Station>,
        measurements: Vec<Measurement>,
    ) -> Result<Self, DatasetError> {
        let known: HashSet<&str> = stations.iter().map(|s| s.id.as_str()).collect();
        if let Some(orphan) = measurements
            .iter()
            .find(|m| !known.contains(m.station_id.as_str()))
        {
            return Err(DatasetError::UnknownStation {
                station: orphan.station_id.clone(),
                date: orphan.date,
            });
        }
        Ok(Self {
            stations,
            measurements,
        })
    }

    /// Every known station, in load order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Every measurement, in load order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }
}
