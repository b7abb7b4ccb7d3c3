use crate::dataset::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimataError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Failed to read configuration")]
    Configuration(#[from] config::ConfigError),

    #[error("Server failed to bind or serve")]
    Serve(#[from] std::io::Error),
}
