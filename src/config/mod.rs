//! Configuration management for campusmud.
//!
//! Configuration is a small TOML file with two sections:
//!
//! ```toml
//! [game]
//! starting_health = 10
//! edible_probability = 0.6
//! item_probability = 0.6
//! # rng_seed = 12345        # fixed seed for a reproducible world
//!
//! [logging]
//! level = "info"
//! # file = "campusmud.log"  # also append log lines to this file
//! ```
//!
//! Every field has a default, so sparse files stay valid; loading fails only
//! when the TOML is malformed or a value fails validation. `campusmud init`
//! writes a starter file via [`Config::create_default`].

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Gameplay knobs: starting health and the spawn behavior of the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Health a new player starts with.
    #[serde(default = "default_starting_health")]
    pub starting_health: u32,
    /// Chance that a freshly built room contains an edible.
    #[serde(default = "default_spawn_probability")]
    pub edible_probability: f64,
    /// Chance that a freshly built room contains an item.
    #[serde(default = "default_spawn_probability")]
    pub item_probability: f64,
    /// Fixed RNG seed for a reproducible world; omit to seed from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

/// Logging settings: base level and an optional log file sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level: "error", "warn", "info", "debug" or "trace".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// When set, log lines are also appended to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_starting_health() -> u32 {
    10
}

fn default_spawn_probability() -> f64 {
    0.6
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: default_starting_health(),
            edible_probability: default_spawn_probability(),
            item_probability: default_spawn_probability(),
            rng_seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path))?;
        let config: Config =
            toml::from_str(&raw).with_context(|| format!("parsing config file {}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a starter config file with default values. Refuses to clobber
    /// an existing file.
    pub fn create_default(path: &str) -> Result<()> {
        if Path::new(path).exists() {
            return Err(anyhow!("config file {} already exists", path));
        }
        let rendered = toml::to_string_pretty(&Config::default())
            .context("serializing default configuration")?;
        std::fs::write(path, rendered)
            .with_context(|| format!("writing config file {}", path))?;
        Ok(())
    }

    /// Check every value the game relies on.
    pub fn validate(&self) -> Result<()> {
        if self.game.starting_health == 0 {
            return Err(anyhow!("game.starting_health must be at least 1"));
        }
        for (name, value) in [
            ("game.edible_probability", self.game.edible_probability),
            ("game.item_probability", self.game.item_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(anyhow!("{} must be within [0.0, 1.0], got {}", name, value));
            }
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(anyhow!(
                "logging.level must be one of error/warn/info/debug/trace, got '{}'",
                other
            )),
        }
    }
}
