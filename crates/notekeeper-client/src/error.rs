//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable response body.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
