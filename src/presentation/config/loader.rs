use config::{Config, ConfigError, File};

use crate::application::services::DEFAULT_CONFIRMATIONS;
use crate::domain::DEFAULT_NAME_SUFFIX;
use crate::infrastructure::naming::BASENAME_L2_RESOLVER;

use super::{Environment, Settings};

const BASE_MAINNET_RPC: &str = "https://mainnet.base.org";

/// Defaults, then `appsettings.<env>.toml`, then `APP__SECTION__KEY`
/// variables, then the bare variable names older deployments used.
pub fn load_settings(environment: Environment) -> Result<Settings, ConfigError> {
    let legacy = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.max_upload_size_bytes", 25 * 1024 * 1024)?
        .set_default("logging.level", "info")?
        .set_default("logging.enable_json", false)?
        .set_default("transcription.provider", "groq")?
        .set_default("transcription.temperature", 0.0)?
        .set_default("transcription.language", "en")?
        .set_default("transcription.timeout_seconds", 60)?
        .set_default("naming.default_suffix", DEFAULT_NAME_SUFFIX)?
        .set_default("naming.basename_rpc_url", BASE_MAINNET_RPC)?
        .set_default("naming.basename_resolver_address", BASENAME_L2_RESOLVER)?
        .set_default("ledger.rpc_url", BASE_MAINNET_RPC)?
        .set_default("ledger.confirmations", DEFAULT_CONFIRMATIONS as i64)?
        .set_default("ledger.poll_interval_ms", 2000)?
        .set_default("ledger.gas_limit", 42_000)?
        .set_default("ledger.max_fee_per_gas_gwei", 50)?
        .set_default("ledger.max_priority_fee_per_gas_gwei", 2)?
        .set_default("storage.local_path", "./uploads")?
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .set_override_option("transcription.api_key", legacy("GROQ_API_KEY"))?
        .set_override_option("ledger.rpc_url", legacy("RPC_URL"))?
        .set_override_option("ledger.private_key", legacy("PRIVATE_KEY"))?
        .set_override_option("server.port", legacy("PORT"))?
        .build()?
        .try_deserialize()
}
