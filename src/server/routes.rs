//! HTTP routes mirroring the `/api/v1.0` surface of the original service.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;

use crate::query::{QueryEngine, RangeAggregate, TemperatureObservation};
use crate::server::error::ApiError;
use crate::types::station::Station;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shared per-process state handed to every handler. The engine wraps the
/// `Arc`'d snapshot published once at startup.
#[derive(Clone)]
pub struct AppState {
    pub engine: QueryEngine,
}

/// Builds the application router over the loaded dataset.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/:start/:end", get(range))
        .with_state(state)
}

async fn index() -> &'static str {
    "Available routes:\n\
     /api/v1.0/precipitation\n\
     /api/v1.0/stations\n\
     /api/v1.0/tobs\n\
     /api/v1.0/<start>/<end>\n"
}

async fn precipitation(
    State(state): State<AppState>,
) -> Json<BTreeMap<NaiveDate, Option<f64>>> {
    Json(state.engine.precipitation())
}

async fn stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.engine.stations().to_vec())
}

async fn tobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    Ok(Json(state.engine.temperature_observations()?))
}

async fn range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<RangeAggregate>>, ApiError> {
    // Validation happens before the engine is touched; no partial
    // computation on a malformed request.
    let start = parse_date(&start)?;
    let end = parse_date(&end)?;
    Ok(Json(state.engine.range(start, end)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ApiError::MalformedDate(raw.to_owned()))
}
