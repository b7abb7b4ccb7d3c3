//! Defines the daily per-station observation record served by the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated precipitation/temperature reading from one station.
///
/// Either value may be absent when the station did not measure it that day;
/// absent readings serialize as `null`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Id of the station that reported this measurement.
    pub station_id: String,
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Precipitation in inches, if measured.
    pub precipitation: Option<f64>,
    /// Observed temperature in degrees Fahrenheit, if measured.
    pub temperature_observation: Option<f64>,
}
