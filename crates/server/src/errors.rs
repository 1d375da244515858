use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use common::types::ApiResponse;
use models::errors::ModelError;
use service::errors::ServiceError;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Errors surfaced by `/api` handlers, rendered as the JSON envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    /// `public` goes to the client, `detail` only to the log.
    #[error("{public}: {detail}")]
    Internal { public: &'static str, detail: String },
}

impl ApiError {
    pub fn not_found() -> Self {
        Self::NotFound("Not found".into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal { public: INTERNAL_SERVER_ERROR, detail: detail.into() }
    }

    /// Replace the client-facing text of an internal error; other kinds pass through.
    pub fn with_public_message(self, public: &'static str) -> Self {
        match self {
            Self::Internal { detail, .. } => Self::Internal { public, detail },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(m) => Self::NotFound(m),
            ServiceError::Validation(m) | ServiceError::Model(ModelError::Validation(m)) => Self::Validation(m),
            other => Self::internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            Self::Internal { public, detail } => {
                error!(error = %detail, "request failed");
                public.to_string()
            }
            Self::NotFound(m) | Self::Validation(m) | Self::BadRequest(m) => m,
        };
        (status, Json(ApiResponse::<()>::fail(msg))).into_response()
    }
}
