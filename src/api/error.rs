//! Route error responses
//!
//! Every route failure is answered with a JSON `{ "error": "..." }` body.

use crate::core::constants::message;
use crate::core::provider::ScraperError;
use crate::models::response::ErrorBody;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The client supplied no input parameter
    #[error("{0}")]
    MissingInput(&'static str),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// The upstream scraper call failed
    #[error("{0}")]
    UpstreamFailure(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingInput(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownPlatform(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ScraperError> for ApiError {
    fn from(err: ScraperError) -> Self {
        let message = err.message().trim();
        if message.is_empty() {
            ApiError::UpstreamFailure(message::INTERNAL_SERVER_ERROR.to_string())
        } else {
            ApiError::UpstreamFailure(message.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
