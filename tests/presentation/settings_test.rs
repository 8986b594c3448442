use zapbase::application::services::DEFAULT_CONFIRMATIONS;
use zapbase::domain::DEFAULT_NAME_SUFFIX;
use zapbase::infrastructure::naming::BASENAME_L2_RESOLVER;
use zapbase::presentation::config::{Environment, TranscriptionProviderSetting, load_settings};

#[test]
fn given_no_settings_file_when_loading_then_built_in_defaults_apply() {
    let settings = load_settings(Environment::Test).unwrap();

    assert_eq!(settings.transcription.provider, TranscriptionProviderSetting::Groq);
    assert_eq!(settings.transcription.timeout_seconds, 60);
    assert_eq!(settings.naming.default_suffix, DEFAULT_NAME_SUFFIX);
    assert_eq!(settings.naming.basename_resolver_address, BASENAME_L2_RESOLVER);
    assert_eq!(settings.ledger.gas_limit, 42_000);
    assert_eq!(settings.ledger.max_fee_per_gas_gwei, 50);
    assert_eq!(settings.ledger.confirmations, DEFAULT_CONFIRMATIONS);
    assert!(settings.parser.patterns.is_empty());
}

#[test]
fn given_prod_environment_without_settings_file_when_loading_then_parser_defaults_apply() {
    let settings = load_settings(Environment::Prod).unwrap();

    assert!(settings.parser.patterns.is_empty());
    assert!(settings.parser.extra_corrections.is_empty());
}

#[test]
fn given_provider_setting_when_displayed_then_uses_config_spelling() {
    assert_eq!(TranscriptionProviderSetting::OpenAi.to_string(), "openai");
    assert_eq!(TranscriptionProviderSetting::Groq.to_string(), "groq");
}
