use crate::utils::error::MovieError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

pub const INVALID_YEAR_MESSAGE: &str = "Invalid year format. Use YYYY format.";
pub const NOT_FOUND_MESSAGE: &str = "No movies found for the specified year.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            MovieError::InvalidYear { value } => {
                tracing::debug!("Rejected year parameter {:?}", value);
                (StatusCode::BAD_REQUEST, INVALID_YEAR_MESSAGE)
            }
            MovieError::NoMoviesFound { year } => {
                tracing::info!("No movies found for {}", year);
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
            other => {
                tracing::error!(
                    "Error processing request: {} (Category: {:?}, Severity: {:?})",
                    other,
                    other.category(),
                    other.severity()
                );
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
