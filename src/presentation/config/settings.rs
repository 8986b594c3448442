use std::fmt;

use serde::Deserialize;

use crate::application::services::CorrectionRule;
use crate::domain::SecretString;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub transcription: TranscriptionSettings,
    pub naming: NamingSettings,
    pub ledger: LedgerSettings,
    #[serde(default)]
    pub parser: ParserSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub api_key: Option<SecretString>,
    /// Overrides the provider's default endpoint.
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    Groq,
    #[serde(rename = "openai")]
    OpenAi,
}

impl fmt::Display for TranscriptionProviderSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptionProviderSetting::Groq => write!(f, "groq"),
            TranscriptionProviderSetting::OpenAi => write!(f, "openai"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamingSettings {
    pub default_suffix: String,
    /// ENS lookups use the ledger RPC when unset.
    pub ens_rpc_url: Option<String>,
    pub basename_rpc_url: String,
    pub basename_resolver_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    pub rpc_url: String,
    pub chain_id: Option<u64>,
    pub private_key: Option<SecretString>,
    pub confirmations: usize,
    pub poll_interval_ms: u64,
    pub gas_limit: u64,
    pub max_fee_per_gas_gwei: u64,
    pub max_priority_fee_per_gas_gwei: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserSettings {
    /// Replaces the built-in command patterns when non-empty.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Replaces the built-in correction table when non-empty.
    #[serde(default)]
    pub corrections: Vec<CorrectionRule>,
    #[serde(default)]
    pub extra_corrections: Vec<CorrectionRule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub local_path: String,
}
