//! Error types for the short.io client.
//!
//! # Design
//! Anything the API says, including a garbled payload, is reported through
//! `ShortenResult::Error`. `ApiError` covers the cases where no exchange
//! happened: the request was rejected before sending, could not be encoded,
//! or the transport never produced a response.

use thiserror::Error;

/// Errors that prevent a request/response exchange from completing.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API key was empty or whitespace.
    #[error("api key must not be empty")]
    MissingApiKey,

    /// `originalURL` was empty or whitespace.
    #[error("originalURL must not be empty")]
    MissingOriginalUrl,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The transport failed before a response was received.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
