// Error types for img-alt-api
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("No image provided")]
    MissingImage,

    #[error("Invalid image type")]
    InvalidImageType,

    #[error("Image size too large")]
    ImageTooLarge,

    #[error("Failed to generate description")]
    GenerationFailed,

    #[error("Not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    // Upstream failure messages are passed to the caller verbatim
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

// Convert RelayError to HTTP responses for Axum
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            RelayError::MissingImage
            | RelayError::InvalidImageType
            | RelayError::ImageTooLarge
            | RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
