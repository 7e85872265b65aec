/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type shared by every client operation.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenience alias for results returned by this crate
pub type CmdbResult<T> = Result<T, AppError>;

/// Errors produced by the CMDBuild client
///
/// Validation variants (`Configuration`, `InvalidPayload`, `NotAuthenticated`)
/// are raised before any request is sent.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP transport failure (connection refused, timeout, TLS...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing or empty connection parameter
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The server rejected the credentials or returned no session token
    #[error("authentication error: {message}")]
    Authentication {
        /// HTTP status of the rejected login, `None` when no token was returned
        status: Option<StatusCode>,
        /// What went wrong, including the server's response body
        message: String,
    },

    /// A resource call was issued before a session was established
    #[error("not authenticated")]
    NotAuthenticated,

    /// Card payload is not valid JSON
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Non-2xx response from the server
    #[error("unexpected response {status}: {body}")]
    UnexpectedResponse {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// The response body did not have the expected shape
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl AppError {
    /// HTTP status carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::UnexpectedResponse { status, .. } => Some(*status),
            AppError::Authentication { status, .. } => *status,
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` for errors raised before any request was sent
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Configuration(_) | AppError::InvalidPayload(_) | AppError::NotAuthenticated
        )
    }
}
