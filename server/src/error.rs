//! Request-boundary errors.
//!
//! # Design
//! Every failure a handler can produce ends up as an `AppError`, which
//! renders itself as a `success:false` envelope. The status code is chosen
//! by variant: validation 400, unknown id 404, anything else 500.

use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::store::StoreError;
use crate::types::Envelope;

type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// No record with the given id.
    #[error("Todo not found")]
    NotFound(String),

    /// Anything else, e.g. a body that is not valid JSON. `message` is the
    /// per-operation text shown to the client; `source` is only logged.
    #[error("{message}")]
    Unexpected {
        message: &'static str,
        #[source]
        source: BoxError,
    },
}

impl AppError {
    pub fn missing_id() -> Self {
        AppError::Validation("Todo ID is required".to_string())
    }

    pub fn unexpected(message: &'static str, source: impl Into<BoxError>) -> Self {
        AppError::Unexpected {
            message,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmptyTitle => AppError::Validation(err.to_string()),
            StoreError::NotFound { id } => AppError::NotFound(id),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Unexpected { message, source } => {
                tracing::error!(error = %source, "{message}");
            }
            AppError::NotFound(id) => tracing::debug!(%id, "todo not found"),
            AppError::Validation(reason) => tracing::debug!(%reason, "rejected request"),
        }
        (status, Json(Envelope::<()>::failure(self.to_string()))).into_response()
    }
}
