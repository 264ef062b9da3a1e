use std::path::Path;

use digit_pulse::config::Config;
use digit_pulse::model::Strategy;

#[test]
fn parse_full_toml() {
    let toml_str = r#"
[deriv]
ws_url = "wss://ws.binaryws.com/websockets/v3"
app_id = 23456
symbol = "CRASH1000"

[analysis]
max_ticks = 250
default_pip_size = 3
strategy = "matches_differs"

[logging]
level = "trace"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.deriv.app_id, 23456);
    assert_eq!(config.deriv.symbol, "CRASH1000");
    assert_eq!(config.analysis.max_ticks, 250);
    assert_eq!(config.analysis.default_pip_size, 3);
    assert_eq!(config.analysis.strategy, Strategy::MatchesDiffers);
    assert_eq!(config.logging.level, "trace");
    assert!(config.validate().is_ok());
}

/// Verifies the shipped config file stays in sync with the built-in
/// defaults, so a missing file changes nothing.
#[test]
fn shipped_default_file_matches_builtin_defaults() {
    let from_file = Config::load_from(Path::new(Config::DEFAULT_PATH)).unwrap();
    let built_in = Config::default();
    assert_eq!(from_file.deriv.ws_url, built_in.deriv.ws_url);
    assert_eq!(from_file.deriv.app_id, built_in.deriv.app_id);
    assert_eq!(from_file.deriv.symbol, built_in.deriv.symbol);
    assert_eq!(from_file.analysis.max_ticks, built_in.analysis.max_ticks);
    assert_eq!(
        from_file.analysis.default_pip_size,
        built_in.analysis.default_pip_size
    );
    assert_eq!(from_file.analysis.strategy, built_in.analysis.strategy);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = Config::load_from(Path::new("config/nonexistent.toml")).unwrap();
    assert_eq!(config.deriv.app_id, 1089);
    assert_eq!(config.deriv.symbol, "1HZ10V");
    assert_eq!(config.analysis.max_ticks, 100);
    assert_eq!(config.analysis.strategy, Strategy::EvenOdd);
}

#[test]
fn rejects_invalid_strategy_id() {
    let toml_str = r#"
[analysis]
strategy = "ladder"
"#;
    assert!(toml::from_str::<Config>(toml_str).is_err());
}

#[test]
fn validation_guards_window_and_pip_size() {
    let mut config = Config::default();
    config.analysis.max_ticks = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.analysis.default_pip_size = 11;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.deriv.ws_url = String::new();
    assert!(config.validate().is_err());
}
