use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use emvcalc::config::Config;
use emvcalc::domain::OptionId;
use emvcalc::error::{ConfigError, Error};
use rust_decimal_macros::dec;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("emvcalc-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_valid_file() {
    let toml = r#"
[logging]
level = "debug"
format = "json"

[without_study]
units = [100000, 75000]
unit_prices = [550.0, 550.0]
probabilities = [0.6, 0.4]

[with_study]
units = [75000, 70000]
unit_prices = [750.0, 750.0]
probabilities = [0.7, 0.3]
cost = 100000.0
"#;

    let path = write_temp_config(toml);
    let config = Config::load(&path).expect("valid config");
    let _ = fs::remove_file(&path);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.without_study.units, [dec!(100000), dec!(75000)]);
    assert_eq!(config.with_study.cost, Some(dec!(100000.0)));
}

#[test]
fn config_rejects_negative_price() {
    let toml = r#"
[with_study]
units = [75000, 70000]
unit_prices = [-750.0, 750.0]
probabilities = [0.7, 0.3]
cost = 100000.0
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "with_study.unit_prices",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid unit_prices error, got {err}"),
        Ok(_) => panic!("Expected negative unit price to be rejected"),
    }
}

#[test]
fn config_rejects_negative_cost() {
    let toml = r#"
[with_study]
units = [75000, 70000]
unit_prices = [750.0, 750.0]
probabilities = [0.7, 0.3]
cost = -1.0
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "with_study.cost",
                ..
            }))
        ),
        "Expected negative cost to be rejected"
    );
}

#[test]
fn config_missing_file_is_an_error_for_load() {
    let mut path = std::env::temp_dir();
    path.push("emvcalc-config-test-does-not-exist.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_missing_file_falls_back_to_defaults() {
    let mut path = std::env::temp_dir();
    path.push("emvcalc-config-test-does-not-exist.toml");

    let config = Config::load_or_default(&path).expect("defaults");
    assert_eq!(config.with_study.cost, Some(dec!(100000.0)));
    assert!(config.option(OptionId::WithoutStudy).is_ok());
}

#[test]
fn config_garbage_toml_is_a_parse_error() {
    let path = write_temp_config("not [valid toml");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}
