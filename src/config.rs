//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FTD_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use ftd_core::TransitionEffect;
use ftd_game::ChaseConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Chase tunables
    #[serde(default)]
    pub gameplay: GameplayConfig,
    /// Sound configuration
    #[serde(default)]
    pub audio: AudioConfig,
    /// Scene transition configuration
    #[serde(default)]
    pub transition: TransitionConfig,
    /// Scene file configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FTD_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // FTD_GAMEPLAY__PLAYER_SPEED=200 -> gameplay.player_speed = 200
        figment = figment.merge(Env::prefixed("FTD_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Transition used both into the result menu and back into the chase
    pub fn transition_effect(&self) -> Result<TransitionEffect, ConfigError> {
        let duration = Duration::try_from_secs_f32(self.transition.duration_secs).map_err(|_| {
            ConfigError::invalid(format!(
                "transition.duration_secs must be a non-negative number, got {}",
                self.transition.duration_secs
            ))
        })?;

        TransitionEffect::from_name(&self.transition.effect, duration).ok_or_else(|| {
            ConfigError::invalid(format!(
                "unknown transition.effect '{}' (expected instant, fade, flip_vertical or flip_horizontal)",
                self.transition.effect
            ))
        })
    }

    /// Build the controller tunables
    pub fn chase_config(&self) -> Result<ChaseConfig, ConfigError> {
        if !(self.gameplay.player_speed > 0.0 && self.gameplay.zombie_speed > 0.0) {
            return Err(ConfigError::invalid(format!(
                "speeds must be positive (player {}, zombie {})",
                self.gameplay.player_speed, self.gameplay.zombie_speed
            )));
        }

        Ok(ChaseConfig {
            player_speed: self.gameplay.player_speed,
            zombie_speed: self.gameplay.zombie_speed,
            zombie_sound: self.audio.zombie_sound.clone(),
            result_transition: self.transition_effect()?,
        })
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fear The Dead".to_string(),
            width: 750,
            height: 1334,
            fullscreen: false,
        }
    }
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayConfig {
    /// Player speed (units per second)
    pub player_speed: f32,
    /// Zombie speed (units per second)
    pub zombie_speed: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            player_speed: 150.0,
            zombie_speed: 75.0,
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Sound attached to every zombie
    pub zombie_sound: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            zombie_sound: "fear_moan.wav".to_string(),
        }
    }
}

/// Transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Effect name (instant, fade, flip_vertical, flip_horizontal)
    pub effect: String,
    /// Duration in seconds
    pub duration_secs: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            effect: "flip_vertical".to_string(),
            duration_secs: 1.0,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Path to the chase scene file
    pub path: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: "assets/scenes/game.ron".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
