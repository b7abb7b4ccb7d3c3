use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("No measurements are present in the dataset")]
    EmptyDataset,
}
