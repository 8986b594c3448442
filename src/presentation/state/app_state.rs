use std::sync::Arc;

use crate::application::services::{CommandInterpreter, TransferService, VoiceCommandService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub voice_command_service: Arc<VoiceCommandService>,
    pub transfer_service: Arc<TransferService>,
    pub interpreter: Arc<CommandInterpreter>,
    pub settings: Arc<Settings>,
}
