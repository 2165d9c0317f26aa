//! Error types for the posts API client

use thiserror::Error;

/// Failures the HTTP client can hit while fetching a resource.
///
/// These never leave [`crate::client::ApiClient::request`]; they are logged
/// there and collapsed into "no data".
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Error retrieving requested content: {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response body: {0}")]
    DecodeError(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
