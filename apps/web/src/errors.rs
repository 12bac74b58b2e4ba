use axum::{
    extract::{
        multipart::MultipartError,
        rejection::{FormRejection, PathRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::render::message;

/// Faults in the UI server's own request handling.
///
/// Assistant API failures never reach this type: they are turned into static
/// messages by the handler that made the call.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Malformed form: {0}")]
    Form(#[from] FormRejection),

    #[error("Malformed path: {0}")]
    Path(#[from] PathRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, text) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Multipart(e) => {
                tracing::warn!("Rejected upload: {e}");
                (e.status(), "The upload could not be read.".to_string())
            }
            AppError::Form(e) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid form: {}", e.body_text()),
            ),
            AppError::Path(e) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid path: {}", e.body_text()),
            ),
        };

        (status, Html(message(&text))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let response = AppError::Validation("Unknown status 'Offer'".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
