//! API errors and their JSON rendering

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fleet_core::FleetError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("no route for {0}")]
    NoRoute(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Fleet(FleetError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::NoRoute(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message sent to clients; does not echo the request
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Fleet(FleetError::NotFound { .. }) => "Fleet not found",
            ApiError::NoRoute(_) => "Not found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}
