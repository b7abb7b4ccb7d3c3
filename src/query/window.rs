//! Derives the trailing one-year window over the dataset.

use chrono::{Duration, NaiveDate};

use crate::query::error::QueryError;
use crate::types::measurement::Measurement;

/// Returns the inclusive window `(end - 365 days, end)` where `end` is the
/// most recent date reported by any station.
///
/// The offset is a fixed 365 days, with no leap-year adjustment.
///
/// # Errors
///
/// Returns [`QueryError::EmptyDataset`] when there are no measurements.
pub fn last_year_window(
    measurements: &[Measurement],
) -> Result<(NaiveDate, NaiveDate), QueryError> {
    let end = measurements
        .iter()
        .map(|m| m.date)
        .max()
        .ok_or(QueryError::EmptyDataset)?;
    Ok((end - Duration::days(365), end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(station_id: &str, date: &str) -> Measurement {
        Measurement {
            station_id: station_id.to_owned(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            precipitation: None,
            temperature_observation: Some(75.0),
        }
    }

    #[test]
    fn window_ends_at_dataset_wide_latest_date() {
        let measurements = vec![
            measurement("S1", "2017-08-23"),
            measurement("S2", "2016-01-05"),
            measurement("S1", "2015-12-31"),
        ];

        let (_, end) = last_year_window(&measurements).unwrap();

        assert_eq!(end, NaiveDate::from_ymd_opt(2017, 8, 23).unwrap());
    }

    #[test]
    fn window_spans_exactly_365_days() {
        let measurements = vec![measurement("S1", "2017-08-23")];

        let (start, end) = last_year_window(&measurements).unwrap();

        assert_eq!(end - start, Duration::days(365));
        assert_eq!(start, NaiveDate::from_ymd_opt(2016, 8, 23).unwrap());
    }

    #[test]
    fn fixed_offset_across_a_leap_day() {
        // 2016 is a leap year; the offset stays 365 days regardless.
        let measurements = vec![measurement("S1", "2016-12-31")];

        let (start, _) = last_year_window(&measurements).unwrap();

        assert_eq!(start, NaiveDate::from_ymd_opt(2016, 1, 1).unwrap());
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert_eq!(last_year_window(&[]), Err(QueryError::EmptyDataset));
    }
}
