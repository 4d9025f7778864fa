use std::io::Write;

use courtwatch::domain::TourCategory;
use courtwatch::error::{ConfigError, Error};
use courtwatch::infrastructure::config::Config;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_every_section() {
    let file = write_temp_config(
        r#"
[logging]
level = "debug"
format = "json"

[monitor]
poll_interval_secs = 30
allowed_tournaments = ["ATP", "Challenger"]

[sofascore]
api_url = "http://localhost:9000/api/v1"
timeout_ms = 2500

[polymarket]
gamma_api_url = "http://localhost:9001"

[telegram]
enabled = false

[recorder]
path = "out/log.csv"
dedupe_rows = true
"#,
    );

    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.monitor.poll_interval_secs, 30);
    assert_eq!(
        config.monitor.allowed_tournaments,
        vec![TourCategory::Atp, TourCategory::Challenger]
    );
    assert_eq!(config.sofascore.timeout_ms, 2500);
    assert_eq!(config.polymarket.timeout_ms, 10_000);
    assert!(!config.telegram.enabled);
    assert!(config.recorder.dedupe_rows);
    assert_eq!(config.recorder.path.to_str(), Some("out/log.csv"));
}

#[test]
fn config_rejects_zero_timeout() {
    let file = write_temp_config("[sofascore]\ntimeout_ms = 0\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "sofascore.timeout_ms",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(_) => panic!("Expected zero timeout to be rejected"),
    }
}

#[test]
fn config_rejects_empty_recorder_path() {
    let file = write_temp_config("[recorder]\npath = \"\"\n");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::MissingField {
            field: "recorder.path"
        }))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml");
    let config = Config::load(path).expect("repository config.toml parses");
    assert_eq!(config.monitor.poll_interval_secs, 15);
}
