//! Analysis error taxonomy and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Everything that can go wrong between request body and reading
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Text input cannot be empty")]
    EmptyInput,

    #[error("Text input too long (max {max} characters)")]
    InputTooLong { max: usize },

    #[error("Error analyzing emotion: {0}")]
    AnalysisFailed(String),

    /// Body was not `{"text": string}`
    #[error("{0}")]
    InvalidBody(String),
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::EmptyInput | AnalysisError::InputTooLong { .. } => StatusCode::BAD_REQUEST,
            AnalysisError::AnalysisFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AnalysisError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Error body: `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse { detail: self.to_string() };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
