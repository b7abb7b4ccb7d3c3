//! The query facade composing the four externally visible operations over
//! one dataset snapshot.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::DatasetSnapshot;
use crate::query::activity::most_active_station;
use crate::query::error::QueryError;
use crate::query::precipitation::precipitation_by_date;
use crate::query::range::{aggregate_range, RangeAggregate};
use crate::query::window::last_year_window;
use crate::types::station::Station;

/// One dated temperature reading of the most active station.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureObservation {
    pub date: NaiveDate,
    pub temperature_observation: Option<f64>,
}

/// Read-only facade over a loaded [`DatasetSnapshot`].
///
/// The engine holds nothing but the shared snapshot, so it is cheap to
/// clone and safe to call from any number of tasks at once.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    snapshot: Arc<DatasetSnapshot>,
}

impl QueryEngine {
    pub fn new(snapshot: Arc<DatasetSnapshot>) -> Self {
        Self { snapshot }
    }

    /// Every known station, in load order.
    pub fn stations(&self) -> &[Station] {
        self.snapshot.stations()
    }

    /// Precipitation per distinct date across all stations (last-seen-wins,
    /// see [`precipitation_by_date`]).
    pub fn precipitation(&self) -> BTreeMap<NaiveDate, Option<f64>> {
        precipitation_by_date(self.snapshot.measurements())
    }

    /// Temperature readings of the most active station over the trailing
    /// 365-day window, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyDataset`] when there are no measurements.
    pub fn temperature_observations(&self) -> Result<Vec<TemperatureObservation>, QueryError> {
        let measurements = self.snapshot.measurements();
        let station = most_active_station(measurements)?;
        let (start, end) = last_year_window(measurements)?;
        let mut observations: Vec<TemperatureObservation> = measurements
            .iter()
            .filter(|m| m.station_id == station && m.date >= start && m.date <= end)
            .map(|m| TemperatureObservation {
                date: m.date,
                temperature_observation: m.temperature_observation,
            })
            .collect();
        observations.sort_by_key(|o| o.date);
        Ok(observations)
    }

    /// Per-date min/avg/max temperature over `[start, end]` inclusive.
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> Vec<RangeAggregate> {
        aggregate_range(self.snapshot.measurements(), start, end)
    }
}
