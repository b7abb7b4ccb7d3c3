//! Defines the data structure representing the weather stations in the
//! dataset, including identity, location and elevation metadata.

use serde::{Deserialize, Serialize};

/// A single weather station and its associated metadata.
///
/// Stations are loaded once at startup and never change afterwards; every
/// [`Measurement`](crate::Measurement) refers back to one of these by id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// The stable station identifier (e.g., "USC00519281").
    pub id: String,
    /// The human-readable station name.
    pub name: String,
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
    /// Elevation above sea level in meters.
    pub elevation: f64,
}
