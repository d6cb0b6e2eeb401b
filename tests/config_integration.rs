//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables,
//! and that the shipped configuration points at a loadable scene.

use std::path::PathBuf;

use fear_the_dead::config::AppConfig;
use fear_the_dead::systems::SimulationSystem;
use ftd_core::SceneManager;
use serial_test::serial;

fn temp_config_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ftd_config_{}_{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_shipped_defaults_match_code_defaults() {
    let config = AppConfig::load().unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.gameplay.player_speed, defaults.gameplay.player_speed);
    assert_eq!(config.gameplay.zombie_speed, defaults.gameplay.zombie_speed);
    assert_eq!(config.audio.zombie_sound, defaults.audio.zombie_sound);
    assert_eq!(config.transition.effect, defaults.transition.effect);
    assert_eq!(config.scene.path, defaults.scene.path);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("FTD_GAMEPLAY__ZOMBIE_SPEED", "90.0");
    std::env::set_var("FTD_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("FTD_GAMEPLAY__ZOMBIE_SPEED");
    std::env::remove_var("FTD_WINDOW__TITLE");

    assert_eq!(config.gameplay.zombie_speed, 90.0);
    assert_eq!(config.window.title, "Test From Env");
    assert_eq!(config.chase_config().unwrap().zombie_speed, 90.0);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = temp_config_dir("layers");
    std::fs::write(
        dir.join("default.toml"),
        "[gameplay]\nplayer_speed = 150.0\nzombie_speed = 75.0\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[gameplay]\nplayer_speed = 220.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.gameplay.player_speed, 220.0);
    assert_eq!(config.gameplay.zombie_speed, 75.0);
    // Sections missing from both files fall back to defaults
    assert_eq!(config.transition.effect, "flip_vertical");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let dir = temp_config_dir("malformed");
    std::fs::write(dir.join("default.toml"), "[gameplay]\nplayer_speed = \"fast\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_configured_scene_loads_and_binds() {
    let config = AppConfig::load().unwrap();
    let mut scenes = SceneManager::new();
    let name = scenes.load_scene(&config.scene.path).unwrap();

    let mut system = SimulationSystem::new(scenes, name.as_str(), config.chase_config().unwrap());
    system.start().unwrap();

    let controller = system.controller();
    assert!(controller.player().is_some());
    assert!(controller.goal().is_some());
    assert!(!controller.zombies().is_empty());

    let graph = system.scenes().active_graph().unwrap();
    assert_eq!(graph.listener(), controller.player());
    for &zombie in controller.zombies() {
        assert_eq!(graph.get(zombie).unwrap().audio[0].source, "fear_moan.wav");
    }
}
