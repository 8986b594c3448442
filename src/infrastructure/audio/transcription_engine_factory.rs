use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::whisper_api_engine::WhisperApiEngine;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const GROQ_MODEL: &str = "whisper-large-v3-turbo";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENAI_MODEL: &str = "whisper-1";

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let (default_base_url, default_model) = match settings.provider {
            TranscriptionProviderSetting::Groq => (GROQ_BASE_URL, GROQ_MODEL),
            TranscriptionProviderSetting::OpenAi => (OPENAI_BASE_URL, OPENAI_MODEL),
        };

        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                TranscriptionError::Configuration(format!(
                    "API key required for {} transcription",
                    settings.provider
                ))
            })?;

        let engine = WhisperApiEngine::new(
            api_key,
            settings.base_url.as_deref().unwrap_or(default_base_url),
            settings.model.as_deref().unwrap_or(default_model),
            Duration::from_secs(settings.timeout_seconds),
        )?
        .with_language(settings.language.clone())
        .with_temperature(settings.temperature);

        Ok(Arc::new(engine))
    }
}
