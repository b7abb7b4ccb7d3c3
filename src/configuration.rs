//! Layered runtime settings for the server binary.
//!
//! Values come from `configuration/base.yaml`, overridable through
//! `APP_`-prefixed environment variables (e.g. `APP_APPLICATION_PORT=9000`).

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub dataset: DatasetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Where the dataset CSV files live, relative to the working directory.
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    pub stations: PathBuf,
    pub measurements: PathBuf,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let config = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .try_parsing(true)
                .separator("_"),
        )
        .build()?;

    config.try_deserialize()
}
