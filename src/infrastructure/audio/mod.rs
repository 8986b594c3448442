mod mock_transcription_engine;
mod transcription_engine_factory;
mod whisper_api_engine;

pub use mock_transcription_engine::MockTranscriptionEngine;
pub use transcription_engine_factory::TranscriptionEngineFactory;
pub use whisper_api_engine::WhisperApiEngine;
