use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Transcript;

/// Returns the same text for any audio.
pub struct MockTranscriptionEngine {
    text: String,
}

impl MockTranscriptionEngine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _file_name: &str,
    ) -> Result<Transcript, TranscriptionError> {
        Ok(Transcript::new(self.text.clone()))
    }
}
