//! Error types for the pet-store client

use thiserror::Error;

/// Errors raised while resolving routes, talking to the pet-store or
/// checking the outcome of a lifecycle step.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PetstoreError {
    /// Connection refused, timeout or any other transport failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No URL template registered under this key
    #[error("no route registered for key: {0}")]
    MissingRoute(String),

    /// The routes resource could not be parsed
    #[error("invalid routes properties: {0}")]
    InvalidProperties(String),

    /// Response body is not the expected JSON
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Status code assertion failed
    #[error("{operation}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        operation: &'static str,
        expected: u16,
        actual: u16,
        body: String,
    },

    /// A check that only rules out 200 got 200
    #[error("{operation}: expected a non-200 status, got 200")]
    UnexpectedOk { operation: &'static str, body: String },

    /// A lifecycle step was run before the steps it depends on
    #[error("cannot {step} while user is {state}")]
    OutOfOrder { step: &'static str, state: String },
}

impl From<dotenvy::Error> for PetstoreError {
    fn from(err: dotenvy::Error) -> Self {
        PetstoreError::InvalidProperties(err.to_string())
    }
}
