mod command_interpreter;
mod command_parser;
mod pattern_error;
mod text_normalizer;
mod transfer_service;
mod voice_command_service;

pub use command_interpreter::{CommandInterpreter, Interpretation};
pub use command_parser::{CommandParser, CommandPattern, DEFAULT_COMMAND_PATTERNS};
pub use pattern_error::PatternError;
pub use text_normalizer::{
    CorrectionRule, DEFAULT_CORRECTIONS, TextNormalizer, default_correction_rules,
};
pub use transfer_service::{DEFAULT_CONFIRMATIONS, TransferError, TransferService};
pub use voice_command_service::{
    AudioUpload, PipelineStage, VoiceCommandError, VoiceCommandOutcome, VoiceCommandService,
};
