mod common;

use std::fs;
use tempfile::TempDir;
use swarm_tracker::config::enums::configuration_error::ConfigurationError;
use swarm_tracker::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config = Configuration::init();
    assert_eq!(config.tracker_config.request_interval, 1800);
    assert_eq!(config.tracker_config.request_interval_minimum, 900);
    assert_eq!(config.tracker_config.numwant_default, 30);
    assert_eq!(config.tracker_config.numwant_max, 50);
    assert_eq!(config.tracker_config.peers_timeout, 2700);
    assert_eq!(config.tracker_config.announce_rate_limit, 0);
    assert!(!config.persistence.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file_not_created() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let result = Configuration::load_from_path(&config_path, false);
    assert!(matches!(result, Err(ConfigurationError::NotCreated(_))));
    assert!(!config_path.exists());
}

#[test]
fn test_config_missing_file_created() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let result = Configuration::load_from_path(&config_path, true);
    assert!(matches!(result, Err(ConfigurationError::Created(_))));
    assert!(config_path.exists());

    let config = Configuration::load_from_path(&config_path, false).unwrap();
    assert_eq!(config, Configuration::init());
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = common::create_test_config();
    config.tracker_config.announce_rate_limit = 15;
    config.persistence.enabled = true;
    config.persistence.path = String::from("/var/lib/tracker/torrents.json");
    Configuration::save_from_config(&config, &config_path).unwrap();

    let loaded = Configuration::load_from_path(&config_path, false).unwrap();
    assert_eq!(loaded.tracker_config.passkeys, vec![String::from(common::PASSKEY)]);
    assert_eq!(loaded.tracker_config.announce_rate_limit, 15);
    assert!(loaded.persistence.enabled);
    assert_eq!(loaded, config);
}

#[test]
fn test_config_invalid_values_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = Configuration::init();
    config.tracker_config.numwant_max = 0;
    Configuration::save_from_config(&config, &config_path).unwrap();

    let result = Configuration::load_from_path(&config_path, true);
    assert!(matches!(result, Err(ConfigurationError::ValidationError(_))));
}

#[test]
fn test_config_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = [").unwrap();

    let result = Configuration::load_from_path(&config_path, false);
    assert!(matches!(result, Err(ConfigurationError::NotCreated(_))));
}
