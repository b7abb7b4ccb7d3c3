use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset file '{0}'")]
    Open(PathBuf, #[source] csv::Error),

    #[error("Failed to parse record in dataset file '{0}'")]
    Parse(PathBuf, #[source] csv::Error),

    #[error("Measurement on {date} references unknown station '{station}'")]
    UnknownStation { station: String, date: NaiveDate },
}
