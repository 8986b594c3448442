use zapbase::infrastructure::observability::TracingConfig;
use zapbase::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_level_feeds_default_filter() {
    let logging = LoggingSettings {
        level: "WARN".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert_eq!(config.default_filter, "warn,zapbase=debug,tower_http=debug");
    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
}

#[test]
fn given_environment_names_when_parsing_then_known_values_are_accepted() {
    assert_eq!(
        Environment::try_from("LOCAL".to_string()).unwrap(),
        Environment::Local
    );
    assert_eq!(
        Environment::try_from("production".to_string()).unwrap(),
        Environment::Prod
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}
