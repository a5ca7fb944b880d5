//! Request body extraction for note creation.
//!
//! `POST /api/notes` takes either a JSON or a urlencoded form body. Any body
//! that cannot be decoded is treated the same as one with missing fields.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use notekeeper_core::{NewNote, Result};
use serde::Deserialize;

use crate::error::ApiError;

/// Raw create-note body before validation.
#[derive(Debug, Default, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl NoteInput {
    pub fn validate(self) -> Result<NewNote> {
        NewNote::from_parts(self.title, self.text)
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.trim()
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for NoteInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(input) = Form::<NoteInput>::from_request(req, state)
                .await
                .map_err(|_| ApiError::missing_fields())?;
            return Ok(input);
        }

        let Json(input) = Json::<NoteInput>::from_request(req, state)
            .await
            .map_err(|_| ApiError::missing_fields())?;
        Ok(input)
    }
}
