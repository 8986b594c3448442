use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::AudioUpload;
use crate::domain::{TransactionResult, Transcript, TransferIntent};
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

use super::error_response::{InputError, error_response};

const AUDIO_FIELD: &str = "audio";
const DEFAULT_FILE_NAME: &str = "recording.mp3";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub transcription: Transcript,
    pub command_detected: bool,
    pub parsed_command: Option<TransferIntent>,
    pub transaction: Option<TransactionResult>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Request carried no multipart body");
            let missing = InputError::MissingAudio;
            return error_response(missing.status(), missing.to_string());
        }
    };
    let mut upload = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read upload: {}", e.body_text()));
            }
        };

        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string();

        match field.bytes().await {
            Ok(data) => upload = Some(AudioUpload::new(file_name, data)),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read audio bytes");
                return error_response(e.status(), format!("Failed to read upload: {}", e.body_text()));
            }
        }
        break;
    }

    let Some(upload) = upload.filter(|u| !u.data.is_empty()) else {
        let e = InputError::MissingAudio;
        tracing::warn!(error = %e, "Transcribe request rejected");
        return error_response(e.status(), e.to_string());
    };

    tracing::debug!(file_name = %upload.file_name, bytes = upload.data.len(), "Audio received");

    match state.voice_command_service.process(upload).await {
        Ok(outcome) => {
            tracing::info!(
                transcript = %sanitize_transcript(&outcome.transcript.text),
                command_detected = outcome.command_detected(),
                "Voice command handled"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    command_detected: outcome.command_detected(),
                    transcription: outcome.transcript,
                    parsed_command: outcome.intent,
                    transaction: outcome.transaction,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Voice command failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
