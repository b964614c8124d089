//! TOML-based cosmetic configuration.
//!
//! The tunables behind the cosmetic features:
//! - Subject color palette
//! - Progress animation timing and stagger
//! - Confetti particle count, glyphs and lifetime range
//! - Pomodoro presets
//!
//! Configuration is stored at `~/.config/studyboost/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::countdown::Preset;
use crate::error::Result;

/// Progress animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Base delay before the first bar moves.
    #[serde(default = "default_stagger_base_ms")]
    pub stagger_base_ms: u64,
    /// Additional delay per row index.
    #[serde(default = "default_stagger_step_ms")]
    pub stagger_step_ms: u64,
}

/// Confetti configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfettiConfig {
    #[serde(default = "default_confetti_count")]
    pub count: usize,
    #[serde(default = "default_min_lifetime_ms")]
    pub min_lifetime_ms: u64,
    #[serde(default = "default_max_lifetime_ms")]
    pub max_lifetime_ms: u64,
    /// Glyphs cycled by particle index.
    #[serde(default = "default_glyphs")]
    pub glyphs: Vec<String>,
}

/// Pomodoro preset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroConfig {
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyboost/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub confetti: ConfettiConfig,
    #[serde(default)]
    pub pomodoro: PomodoroConfig,
}

// Default functions
fn default_transition_ms() -> u64 {
    700
}
fn default_stagger_base_ms() -> u64 {
    40
}
fn default_stagger_step_ms() -> u64 {
    40
}
fn default_confetti_count() -> usize {
    20
}
fn default_min_lifetime_ms() -> u64 {
    1500
}
fn default_max_lifetime_ms() -> u64 {
    2200
}
fn default_glyphs() -> Vec<String> {
    ["🎉", "🍪", "✨", "👏"].map(String::from).to_vec()
}
fn default_presets() -> Vec<Preset> {
    vec![
        Preset {
            work_min: 25,
            break_min: 5,
        },
        Preset {
            work_min: 50,
            break_min: 10,
        },
        Preset {
            work_min: 15,
            break_min: 3,
        },
    ]
}
fn default_palette() -> Vec<String> {
    [
        "#60a5fa", "#7dd3fc", "#7c3aed", "#f97316", "#f472b6", "#34d399", "#f59e0b", "#ef4444",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            stagger_base_ms: default_stagger_base_ms(),
            stagger_step_ms: default_stagger_step_ms(),
        }
    }
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            count: default_confetti_count(),
            min_lifetime_ms: default_min_lifetime_ms(),
            max_lifetime_ms: default_max_lifetime_ms(),
            glyphs: default_glyphs(),
        }
    }
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            presets: default_presets(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            progress: ProgressConfig::default(),
            confetti: ConfettiConfig::default(),
            pomodoro: PomodoroConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Resolved configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
