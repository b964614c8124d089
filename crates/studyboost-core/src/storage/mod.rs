mod config;
pub mod database;

pub use config::{Config, ConfettiConfig, PomodoroConfig, ProgressConfig};
pub use database::Database;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/studyboost[-dev]/` based on STUDYBOOST_ENV.
///
/// Set STUDYBOOST_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYBOOST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studyboost-dev")
    } else {
        base_dir.join("studyboost")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
