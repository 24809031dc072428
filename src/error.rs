// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::gemini::GenerationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Gemini client not configured. Set GEMINI_API_KEY in environment.")]
    NotConfigured,

    #[error("Empty message.")]
    EmptyMessage,

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::NotConfigured | AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::EmptyMessage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::NotConfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let cause = GenerationError::Api("429 RESOURCE_EXHAUSTED. quota".into());
        let upstream = AppError::from(cause);
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            upstream.to_string(),
            "Generation error: 429 RESOURCE_EXHAUSTED. quota"
        );
    }
}
