use std::path::PathBuf;

use lifewheel_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn defaults_target_the_upcoming_plan_year() {
    let config = Config::default();
    assert_eq!(config.locale, "zh");
    assert_eq!(config.plan_year, 2026);
    assert!(config.ui_color_enabled);
    assert!(config.data_root.is_none());
}

#[test]
fn save_and_load_round_trips() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut config = Config::default();
    config.locale = "en".into();
    config.plan_year = 2027;
    config.data_root = Some(PathBuf::from("/tmp/wheel"));

    manager.save(&config).expect("save config");
    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn partial_config_fills_defaulted_fields() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.config_path(), r#"{"locale": "en"}"#).expect("write config");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.locale, "en");
    assert_eq!(loaded.plan_year, 2026);
}

#[test]
fn custom_data_root_wins_over_platform_default() {
    let mut config = Config::default();
    config.data_root = Some(PathBuf::from("/srv/wheel-data"));
    assert_eq!(config.resolve_data_root(), PathBuf::from("/srv/wheel-data"));
}
