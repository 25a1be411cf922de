use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::models::ErrorDetails;

pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// HubSpot rejected the request (4xx) or the request could not be built.
    #[error("{0}")]
    BadRequest(String),
    /// HubSpot failed on its side (5xx). Holds the raw upstream body.
    #[error("Server error on HubSpot's side: {0}")]
    UpstreamServerError(String),
    /// Anything else. The cause is logged, never returned to the caller.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(cause: impl std::fmt::Display) -> Self {
        AppError::Unexpected(cause.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamServerError(_) | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(_) | AppError::UpstreamServerError(_) => self.to_string(),
            AppError::Unexpected(_) => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Unexpected(cause) = &self {
            error!("unhandled failure: {cause}");
        }
        let status = self.status();
        let details = ErrorDetails::now(status, self.public_message());
        (status, Json(details)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::unexpected(format!("hubspot request failed: {err}"))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::unexpected(format!("invalid request body: {}", rejection.body_text()))
    }
}
