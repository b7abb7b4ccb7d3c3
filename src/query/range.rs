//! Per-date temperature aggregates over an arbitrary date range.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::measurement::Measurement;

/// Minimum, mean and maximum observed temperature for a single date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeAggregate {
    pub date: NaiveDate,
    pub tmin: f64,
    pub tavg: f64,
    pub tmax: f64,
}

/// Aggregates temperature observations per date over `[start, end]`, both
/// ends inclusive, ascending by date.
///
/// An inverted range (`start > end`) matches nothing and yields an empty
/// vec rather than an error. Absent temperature readings are excluded from
/// the aggregates; a date whose measurements carry no temperature at all
/// produces no row.
pub fn aggregate_range(
    measurements: &[Measurement],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<RangeAggregate> {
    let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for measurement in measurements {
        if measurement.date < start || measurement.date > end {
            continue;
        }
        if let Some(temperature) = measurement.temperature_observation {
            by_date.entry(measurement.date).or_default().push(temperature);
        }
    }
    by_date
        .into_iter()
        .map(|(date, temperatures)| aggregate_group(date, &temperatures))
        .collect()
}

fn aggregate_group(date: NaiveDate, temperatures: &[f64]) -> RangeAggregate {
    let mut tmin = f64::INFINITY;
    let mut tmax = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &temperature in temperatures {
        tmin = tmin.min(temperature);
        tmax = tmax.max(temperature);
        sum += temperature;
    }
    // A float sum can drift a hair past the extremes; the mean must stay
    // inside [tmin, tmax].
    let tavg = (sum / temperatures.len() as f64).clamp(tmin, tmax);
    RangeAggregate {
        date,
        tmin,
        tavg,
        tmax,
    }
}
