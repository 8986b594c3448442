use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::AmountError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request problems the caller can fix; always a 400.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No audio file uploaded")]
    MissingAudio,
    #[error("Missing required fields.")]
    MissingFields,
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),
}

impl InputError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}
