mod activity;
mod engine;
mod error;
mod precipitation;
mod range;
mod window;

pub use activity::most_active_station;
pub use engine::{QueryEngine, TemperatureObservation};
pub use error::QueryError;
pub use precipitation::precipitation_by_date;
pub use range::{aggregate_range, RangeAggregate};
pub use window::last_year_window;
