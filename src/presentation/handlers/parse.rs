use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::TransferIntent;
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub normalized: String,
    pub parsed_command: Option<TransferIntent>,
}

/// Runs the interpreter on typed text; nothing is sent.
#[tracing::instrument(skip(state, request))]
pub async fn parse_handler(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> impl IntoResponse {
    tracing::debug!(text = %sanitize_transcript(&request.text), "Parsing command text");
    let interpretation = state.interpreter.interpret(&request.text);

    (
        StatusCode::OK,
        Json(ParseResponse {
            normalized: interpretation.normalized,
            parsed_command: interpretation.intent,
        }),
    )
}
