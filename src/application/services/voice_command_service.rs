use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream;
use tracing::Instrument;

use crate::application::ports::{
    StagingStore, StagingStoreError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{StagingPath, TransactionResult, Transcript, TransferIntent, UploadId};

use super::{CommandInterpreter, TransferService};

const DEFAULT_AUDIO_EXTENSION: &str = ".mp3";

/// Where a voice command currently is. The flow is strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Uploaded,
    Transcribing,
    Parsed,
    Unparsed,
    Dispatching,
    Done,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Uploaded => "UPLOADED",
            PipelineStage::Transcribing => "TRANSCRIBING",
            PipelineStage::Parsed => "PARSED",
            PipelineStage::Unparsed => "UNPARSED",
            PipelineStage::Dispatching => "DISPATCHING",
            PipelineStage::Done => "DONE",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct AudioUpload {
    pub file_name: String,
    pub data: Bytes,
}

impl AudioUpload {
    pub fn new(file_name: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }

    /// Lowercased extension with its dot; `.mp3` when the name has none.
    pub fn extension(&self) -> String {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_else(|| DEFAULT_AUDIO_EXTENSION.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct VoiceCommandOutcome {
    pub transcript: Transcript,
    pub intent: Option<TransferIntent>,
    pub transaction: Option<TransactionResult>,
}

impl VoiceCommandOutcome {
    pub fn command_detected(&self) -> bool {
        self.intent.is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceCommandError {
    #[error("staging: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}

/// Upload → transcription → interpretation → transfer, one request at a time.
pub struct VoiceCommandService {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    staging_store: Arc<dyn StagingStore>,
    interpreter: Arc<CommandInterpreter>,
    transfer_service: Arc<TransferService>,
}

impl VoiceCommandService {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        staging_store: Arc<dyn StagingStore>,
        interpreter: Arc<CommandInterpreter>,
        transfer_service: Arc<TransferService>,
    ) -> Self {
        Self {
            transcription_engine,
            staging_store,
            interpreter,
            transfer_service,
        }
    }

    pub async fn process(
        &self,
        upload: AudioUpload,
    ) -> Result<VoiceCommandOutcome, VoiceCommandError> {
        let upload_id = UploadId::new();
        let span = tracing::info_span!("voice_command", upload_id = %upload_id.as_uuid());
        self.run(upload_id, upload).instrument(span).await
    }

    async fn run(
        &self,
        upload_id: UploadId,
        upload: AudioUpload,
    ) -> Result<VoiceCommandOutcome, VoiceCommandError> {
        let path = StagingPath::new(&upload_id, &upload.extension());
        tracing::debug!(stage = %PipelineStage::Uploaded, path = %path, bytes = upload.data.len(), "Voice command stage");

        let transcript = self.transcribe_staged(&path, upload.data).await;
        self.discard(&path).await;
        let transcript = transcript?;

        let interpretation = self.interpreter.interpret(&transcript.text);
        let Some(intent) = interpretation.intent else {
            tracing::info!(
                stage = %PipelineStage::Unparsed,
                normalized = %interpretation.normalized,
                "No transfer command detected"
            );
            return Ok(VoiceCommandOutcome {
                transcript,
                intent: None,
                transaction: None,
            });
        };

        tracing::info!(
            stage = %PipelineStage::Parsed,
            amount = %intent.amount,
            recipient = %intent.recipient,
            "Transfer command detected"
        );

        let transcript = transcript.with_text(intent.canonical_phrase());

        tracing::debug!(stage = %PipelineStage::Dispatching, "Voice command stage");
        let transaction = self.transfer_service.execute(&intent, None).await;

        tracing::info!(stage = %PipelineStage::Done, success = transaction.success, "Voice command finished");

        Ok(VoiceCommandOutcome {
            transcript,
            intent: Some(intent),
            transaction: Some(transaction),
        })
    }

    async fn transcribe_staged(
        &self,
        path: &StagingPath,
        data: Bytes,
    ) -> Result<Transcript, VoiceCommandError> {
        let byte_stream = stream::once(async move { Ok::<_, io::Error>(data) }).boxed();
        let stored = self.staging_store.store(path, byte_stream).await?;
        tracing::debug!(path = %path, bytes = stored, "Audio staged");

        tracing::debug!(stage = %PipelineStage::Transcribing, "Voice command stage");
        let audio = self.staging_store.fetch(path).await?;
        let transcript = self
            .transcription_engine
            .transcribe(&audio, path.file_name())
            .await?;

        Ok(transcript)
    }

    async fn discard(&self, path: &StagingPath) {
        if let Err(e) = self.staging_store.delete(path).await {
            tracing::warn!(error = %e, path = %path, "Failed to delete staged audio");
        }
    }
}
