//! Ranks stations by how many measurements they reported.

use std::collections::HashMap;

use crate::query::error::QueryError;
use crate::types::measurement::Measurement;

/// Returns the id of the station with the most measurements.
///
/// Ties resolve to the lexicographically smallest station id, so repeated
/// calls over the same dataset always agree.
///
/// # Errors
///
/// Returns [`QueryError::EmptyDataset`] when there are no measurements.
pub fn most_active_station(measurements: &[Measurement]) -> Result<&str, QueryError> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for measurement in measurements {
        *counts.entry(measurement.station_id.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(id_a, count_a), (id_b, count_b)| {
            // On equal counts the smaller id must compare greater, so the
            // reversed id comparison makes max_by pick it.
            count_a.cmp(count_b).then_with(|| id_b.cmp(id_a))
        })
        .map(|(id, _)| id)
        .ok_or(QueryError::EmptyDataset)
}
