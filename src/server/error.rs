//! Maps query failures onto transport-level responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::query::QueryError;

/// Errors surfaced to HTTP clients.
///
/// A malformed request is distinguished from "valid input, no data"; an
/// empty range result is not an error at all and never reaches this type.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("'{0}' is not a valid YYYY-MM-DD date")]
    MalformedDate(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedDate(_) => StatusCode::BAD_REQUEST,
            ApiError::Query(QueryError::EmptyDataset) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
