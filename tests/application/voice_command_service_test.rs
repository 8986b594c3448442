use std::sync::Arc;

use bytes::Bytes;

use zapbase::application::services::{
    AudioUpload, CommandInterpreter, PipelineStage, TransferService, VoiceCommandError,
    VoiceCommandService,
};
use zapbase::application::ports::TranscriptionEngine;
use zapbase::infrastructure::audio::MockTranscriptionEngine;
use zapbase::infrastructure::storage::LocalStagingStore;

use crate::helpers::{
    CapturingTranscriptionEngine, FailingTranscriptionEngine, RecordingLedgerConnector,
    count_files, eth, resolver_with_alice,
};

struct Fixture {
    dir: tempfile::TempDir,
    connector: Arc<RecordingLedgerConnector>,
    service: VoiceCommandService,
}

fn fixture(engine: Arc<dyn TranscriptionEngine>) -> Fixture {
    let dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(LocalStagingStore::new(dir.path().to_path_buf()).unwrap());
    let connector = Arc::new(RecordingLedgerConnector::with_balance(eth("1")));
    let transfer_service = Arc::new(TransferService::new(
        Arc::new(resolver_with_alice()),
        connector.clone(),
        1,
    ));
    let service = VoiceCommandService::new(
        engine,
        store,
        Arc::new(CommandInterpreter::default()),
        transfer_service,
    );
    Fixture {
        dir,
        connector,
        service,
    }
}

fn upload(name: &str) -> AudioUpload {
    AudioUpload::new(name, Bytes::from_static(b"fake-audio-bytes"))
}

#[tokio::test]
async fn given_spoken_command_when_processing_then_transfer_runs_and_transcript_is_canonical() {
    let f = fixture(Arc::new(MockTranscriptionEngine::new("Send 0.5 ETH to Alice.")));

    let outcome = f.service.process(upload("voice.mp3")).await.unwrap();

    assert!(outcome.command_detected());
    assert_eq!(outcome.transcript.text, "Send 0.5 ETH to alice.base.eth");
    assert!(outcome.transaction.unwrap().success);
    assert_eq!(f.connector.submissions().len(), 1);
}

#[tokio::test]
async fn given_successful_run_when_processing_then_staging_directory_is_empty() {
    let f = fixture(Arc::new(MockTranscriptionEngine::new("send 0.5 eth to alice")));

    f.service.process(upload("voice.mp3")).await.unwrap();

    assert_eq!(count_files(f.dir.path()), 0);
}

#[tokio::test]
async fn given_transcription_failure_when_processing_then_error_is_returned_and_file_removed() {
    let f = fixture(Arc::new(FailingTranscriptionEngine));

    let result = f.service.process(upload("voice.wav")).await;

    assert!(matches!(result, Err(VoiceCommandError::Transcription(_))));
    assert_eq!(count_files(f.dir.path()), 0);
    assert_eq!(f.connector.connects(), 0);
}

#[tokio::test]
async fn given_chatter_when_processing_then_no_transfer_is_attempted() {
    let f = fixture(Arc::new(MockTranscriptionEngine::new("What is the weather today?")));

    let outcome = f.service.process(upload("voice.mp3")).await.unwrap();

    assert!(!outcome.command_detected());
    assert!(outcome.transaction.is_none());
    assert_eq!(outcome.transcript.text, "What is the weather today?");
    assert_eq!(f.connector.connects(), 0);
}

#[tokio::test]
async fn given_upload_when_processing_then_engine_receives_staged_bytes_with_extension() {
    let engine = Arc::new(CapturingTranscriptionEngine::new("hello"));
    let f = fixture(engine.clone());

    f.service.process(upload("Note.WEBM")).await.unwrap();

    let received = engine.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].0, b"fake-audio-bytes");
    assert!(received[0].1.ends_with(".webm"), "{}", received[0].1);
}

#[test]
fn given_file_without_extension_when_reading_extension_then_defaults_to_mp3() {
    assert_eq!(upload("recording").extension(), ".mp3");
    assert_eq!(upload("clip.OGG").extension(), ".ogg");
}

#[test]
fn given_pipeline_stage_when_displayed_then_uses_upper_case_name() {
    assert_eq!(PipelineStage::Dispatching.to_string(), "DISPATCHING");
    assert_eq!(PipelineStage::Unparsed.as_str(), "UNPARSED");
}
