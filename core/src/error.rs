//! Error types for the todo API client.
//!
//! # Design
//! Status codes the server uses deliberately get their own variants: 400 is
//! `Validation`, 404 is `NotFound`. Anything else non-expected lands in
//! `HttpError`. The envelope's `error` string is carried along whenever the
//! body has one, otherwise the raw body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400: a required field was missing or empty.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The server returned an unexpected status.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Expected status, but the envelope said `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Successful envelope without a `data` payload.
    #[error("response envelope has no data")]
    MissingData,

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
