//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use hypercube::config::{AppConfig, ConfigError};
use serial_test::serial;

/// Fresh config directory under the system temp dir
fn config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hypercube-config-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_shipped_defaults_load() {
    std::env::remove_var("HYPERCUBE_PUZZLE__RULE_SEED");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.puzzle.rule_seed, 1);
    assert_eq!(config.timing.strike_delay, 2.22);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HYPERCUBE_PUZZLE__RULE_SEED", "42");
    let config = AppConfig::load_from(config_dir("env"));
    std::env::remove_var("HYPERCUBE_PUZZLE__RULE_SEED");
    assert_eq!(config.unwrap().puzzle.rule_seed, 42);
}

#[test]
#[serial]
fn test_user_overrides_default() {
    let dir = config_dir("user");
    fs::write(dir.join("default.toml"), "[puzzle]\ninstance_id = 3\nrule_seed = 9\n").unwrap();
    fs::write(dir.join("user.toml"), "[puzzle]\nrule_seed = 11\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.puzzle.instance_id, 3);
    assert_eq!(config.puzzle.rule_seed, 11);
    assert_eq!(config.puzzle.rng_seed, None);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from(config_dir("missing").join("nope")).unwrap();
    assert_eq!(config.simulation.frame_rate, 60);
    assert_eq!(config.timing.long_press, 0.7);
}

#[test]
#[serial]
fn test_invalid_values_rejected() {
    let dir = config_dir("invalid");
    fs::write(dir.join("default.toml"), "[projection]\nw_distance = 1.0\n").unwrap();
    assert!(matches!(AppConfig::load_from(&dir), Err(ConfigError::Invalid(_))));
}

#[test]
#[serial]
fn test_wrong_type_is_load_error() {
    let dir = config_dir("type");
    fs::write(dir.join("default.toml"), "[puzzle]\nrule_seed = \"seven\"\n").unwrap();
    assert!(matches!(AppConfig::load_from(&dir), Err(ConfigError::Load(_))));
}

#[test]
#[serial]
fn test_serialized_config_reloads() {
    let dir = config_dir("roundtrip");
    let mut original = AppConfig::default();
    original.puzzle.rng_seed = Some(77);
    original.timing.fade_duration = 2.0;
    fs::write(dir.join("default.toml"), toml::to_string(&original).unwrap()).unwrap();

    let loaded = AppConfig::load_from(&dir).unwrap();
    assert_eq!(loaded.puzzle.rng_seed, Some(77));
    assert_eq!(loaded.timing, original.timing);
}
