use async_trait::async_trait;

use crate::domain::Transcript;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// `file_name` carries the container extension the provider uses to
    /// detect the audio format.
    async fn transcribe(
        &self,
        audio_data: &[u8],
        file_name: &str,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("transcription timed out: {0}")]
    Timeout(String),
    #[error("engine configuration invalid: {0}")]
    Configuration(String),
}
