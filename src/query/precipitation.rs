//! Builds the date-keyed precipitation view across the whole dataset.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::measurement::Measurement;

/// Collapses all measurements into one precipitation entry per distinct date.
///
/// Measurements are visited in load order; when dates collide the later
/// value overwrites the earlier one, regardless of which station reported it
/// (last-seen-wins). Absent readings are kept as `None` so the serialized
/// object still carries an entry for the date.
pub fn precipitation_by_date(measurements: &[Measurement]) -> BTreeMap<NaiveDate, Option<f64>> {
    let mut by_date = BTreeMap::new();
    for measurement in measurements {
        by_date.insert(measurement.date, measurement.precipitation);
    }
    by_date
}
