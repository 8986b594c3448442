use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use zapbase::application::services::{
    CommandInterpreter, CommandParser, TextNormalizer, TransferService, VoiceCommandService,
    default_correction_rules,
};
use zapbase::infrastructure::audio::TranscriptionEngineFactory;
use zapbase::infrastructure::ledger::{EthersLedgerConnector, GasPolicy};
use zapbase::infrastructure::naming::NameResolverFactory;
use zapbase::infrastructure::observability::{TracingConfig, init_tracing};
use zapbase::infrastructure::storage::LocalStagingStore;
use zapbase::presentation::config::ParserSettings;
use zapbase::presentation::{AppState, Environment, create_router, load_settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = load_settings(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let interpreter = Arc::new(
        build_interpreter(&settings.parser, &settings.naming.default_suffix)
            .context("Invalid parser configuration")?,
    );
    tracing::info!(
        corrections = interpreter.normalizer().rule_count(),
        patterns = interpreter.parser().patterns().len(),
        "Command interpreter ready"
    );

    let transcription_engine = TranscriptionEngineFactory::create(&settings.transcription)
        .context("Invalid transcription configuration")?;

    let name_resolver = NameResolverFactory::create(&settings.naming, &settings.ledger.rpc_url)
        .context("Invalid naming configuration")?;

    let ledger = &settings.ledger;
    let connector = EthersLedgerConnector::new(
        ledger.rpc_url.clone(),
        ledger.chain_id,
        ledger.private_key.clone(),
        GasPolicy {
            gas_limit: ledger.gas_limit,
            max_fee_per_gas_gwei: ledger.max_fee_per_gas_gwei,
            max_priority_fee_per_gas_gwei: ledger.max_priority_fee_per_gas_gwei,
        },
    )
    .with_poll_interval(Duration::from_millis(ledger.poll_interval_ms));
    if !connector.has_default_signer() {
        tracing::warn!("No wallet key configured; voice transfers will fail until one is set");
    }

    let transfer_service = Arc::new(TransferService::new(
        name_resolver,
        Arc::new(connector),
        ledger.confirmations,
    ));

    let staging_store = Arc::new(
        LocalStagingStore::new(PathBuf::from(&settings.storage.local_path))
            .context("Failed to prepare staging directory")?,
    );

    let voice_command_service = Arc::new(VoiceCommandService::new(
        transcription_engine,
        staging_store,
        Arc::clone(&interpreter),
        Arc::clone(&transfer_service),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        voice_command_service,
        transfer_service,
        interpreter,
        settings: Arc::new(settings),
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_interpreter(
    parser: &ParserSettings,
    default_suffix: &str,
) -> anyhow::Result<CommandInterpreter> {
    let mut rules = if parser.corrections.is_empty() {
        default_correction_rules()
    } else {
        parser.corrections.clone()
    };
    rules.extend(parser.extra_corrections.iter().cloned());

    let normalizer = TextNormalizer::new(&rules)?;
    let parser = CommandParser::from_patterns(&parser.patterns, default_suffix)?;
    Ok(CommandInterpreter::new(normalizer, parser))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
