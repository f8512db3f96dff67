use docsum::infrastructure::observability::TracingConfig;
use docsum::presentation::Environment;
use docsum::presentation::Settings;
use docsum::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_applies_level_to_crate_and_http() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_directives, "info,docsum=warn,tower_http=warn");
}

#[test]
fn given_default_config_when_created_then_has_debug_directives_for_crate() {
    let config = TracingConfig::default();

    assert!(!config.environment.is_empty());
    assert!(config.default_directives.contains("docsum=debug"));
}

#[test]
fn given_default_logging_settings_when_building_config_then_crate_logs_at_debug() {
    let settings = Settings::default();

    let config = TracingConfig::from_settings(Environment::Local, &settings.logging);

    assert_eq!(config.default_directives, "info,docsum=debug,tower_http=debug");
}
