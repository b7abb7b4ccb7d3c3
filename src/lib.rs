//! Read-only JSON API over a fixed historical climate dataset: station
//! metadata plus daily per-station precipitation and temperature
//! observations, loaded once at startup and served as four aggregate views.

mod configuration;
mod dataset;
mod error;
mod query;
mod server;
mod types;

pub use error::ClimataError;

pub use configuration::{get_configuration, ApplicationSettings, DatasetSettings, Settings};
pub use dataset::{load_snapshot, DatasetError, DatasetSnapshot};
pub use query::{aggregate_range, last_year_window, most_active_station, precipitation_by_date};
pub use query::{QueryEngine, QueryError, RangeAggregate, TemperatureObservation};
pub use server::{router, ApiError, AppState};
pub use types::measurement::Measurement;
pub use types::station::Station;
