//! Feature-flag record and its store.
//!
//! Seven booleans, persisted wholesale as a single JSON key-value entry.
//! Loading never fails: a missing key or malformed payload yields the full
//! default record, and a payload missing individual fields takes the default
//! for each absent field. Unknown fields are ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AddonError, Result};
use crate::storage::Database;

/// Key of the single durable settings entry.
pub const SETTINGS_KEY: &str = "study_addons_v1";

/// The seven-flag record controlling which add-on behaviors are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_true")]
    pub animated_progress: bool,
    #[serde(default = "default_true")]
    pub subject_colors: bool,
    #[serde(default)]
    pub pomodoro: bool,
    #[serde(default = "default_true")]
    pub streaks: bool,
    #[serde(default = "default_true")]
    pub confetti: bool,
    #[serde(default = "default_true")]
    pub quick_plus: bool,
    #[serde(default)]
    pub light_theme: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animated_progress: true,
            subject_colors: true,
            pomodoro: false,
            streaks: true,
            confetti: true,
            quick_plus: true,
            light_theme: false,
        }
    }
}

impl Settings {
    /// Read the persisted record. Missing entry or malformed content yields
    /// the default record; this never raises.
    pub fn load(db: &Database) -> Self {
        match db.kv_get(SETTINGS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Persist the complete record, overwriting wholesale.
    pub fn save(&self, db: &Database) -> Result<()> {
        db.kv_set(SETTINGS_KEY, &serde_json::to_string(self)?)?;
        Ok(())
    }

    /// Replace the persisted record with defaults and return them.
    pub fn reset(db: &Database) -> Result<Self> {
        let settings = Self::default();
        settings.save(db)?;
        Ok(settings)
    }

    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::AnimatedProgress => self.animated_progress,
            Flag::SubjectColors => self.subject_colors,
            Flag::Pomodoro => self.pomodoro,
            Flag::Streaks => self.streaks,
            Flag::Confetti => self.confetti,
            Flag::QuickPlus => self.quick_plus,
            Flag::LightTheme => self.light_theme,
        }
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::AnimatedProgress => self.animated_progress = value,
            Flag::SubjectColors => self.subject_colors = value,
            Flag::Pomodoro => self.pomodoro = value,
            Flag::Streaks => self.streaks = value,
            Flag::Confetti => self.confetti = value,
            Flag::QuickPlus => self.quick_plus = value,
            Flag::LightTheme => self.light_theme = value,
        }
    }
}

/// Names of the seven settings fields, for toggling via CLI or API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    AnimatedProgress,
    SubjectColors,
    Pomodoro,
    Streaks,
    Confetti,
    QuickPlus,
    LightTheme,
}

impl Flag {
    pub const ALL: [Flag; 7] = [
        Flag::AnimatedProgress,
        Flag::SubjectColors,
        Flag::Pomodoro,
        Flag::Streaks,
        Flag::Confetti,
        Flag::QuickPlus,
        Flag::LightTheme,
    ];
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Flag::AnimatedProgress => "animated-progress",
            Flag::SubjectColors => "subject-colors",
            Flag::Pomodoro => "pomodoro",
            Flag::Streaks => "streaks",
            Flag::Confetti => "confetti",
            Flag::QuickPlus => "quick-plus",
            Flag::LightTheme => "light-theme",
        };
        f.write_str(name)
    }
}

impl FromStr for Flag {
    type Err = AddonError;

    /// Accepts kebab-case, snake_case and camelCase spellings.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "animatedprogress" => Ok(Flag::AnimatedProgress),
            "subjectcolors" => Ok(Flag::SubjectColors),
            "pomodoro" => Ok(Flag::Pomodoro),
            "streaks" => Ok(Flag::Streaks),
            "confetti" => Ok(Flag::Confetti),
            "quickplus" => Ok(Flag::QuickPlus),
            "lighttheme" => Ok(Flag::LightTheme),
            _ => Err(AddonError::InvalidValue(format!("unknown flag: {s}"))),
        }
    }
}
