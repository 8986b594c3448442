mod environment;
mod loader;
mod settings;

pub use environment::Environment;
pub use loader::load_settings;
pub use settings::{
    LedgerSettings, LoggingSettings, NamingSettings, ParserSettings, ServerSettings, Settings,
    StorageSettings, TranscriptionProviderSetting, TranscriptionSettings,
};
