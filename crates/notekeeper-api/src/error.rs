//! HTTP error mapping.
//!
//! Every handler returns `Result<_, ApiError>`. Store failures never leak
//! their details to the client: the response carries a fixed message and
//! the underlying error is logged.

use axum::{http::StatusCode, response::IntoResponse, Json};
use notekeeper_core::defaults::MSG_MISSING_FIELDS;

#[derive(Debug)]
pub enum ApiError {
    /// Client sent an invalid request (400).
    BadRequest(String),
    /// Store could not be read or written (500).
    Storage {
        message: &'static str,
        source: notekeeper_core::Error,
    },
}

impl ApiError {
    pub fn missing_fields() -> Self {
        ApiError::BadRequest(MSG_MISSING_FIELDS.to_string())
    }

    /// Wrap a store failure behind a fixed public message.
    pub fn storage(message: &'static str) -> impl FnOnce(notekeeper_core::Error) -> Self {
        move |source| match source {
            notekeeper_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            source => ApiError::Storage { message, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Storage { message, source } => {
                tracing::error!(error = %source, "{}", message);
                message.to_string()
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
