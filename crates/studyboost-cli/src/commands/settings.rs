use std::io::{self, BufRead, Write};

use clap::Subcommand;
use studyboost_core::settings::Flag;
use studyboost_core::storage::Database;
use studyboost_core::Settings;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current settings record as JSON
    Show,
    /// Turn one flag on or off
    Set {
        /// Flag name (e.g. "confetti", "quick-plus", "light-theme")
        flag: String,
        /// New value: true or false
        value: String,
    },
    /// Restore all flags to their defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn parse_bool(s: &str) -> Result<bool, Box<dyn std::error::Error>> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(format!("expected true or false, got: {s}").into()),
    }
}

fn confirm_reset() -> Result<bool, Box<dyn std::error::Error>> {
    print!("Reset all settings to defaults? [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        SettingsAction::Show => {
            let settings = Settings::load(&db);
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsAction::Set { flag, value } => {
            let flag: Flag = flag.parse()?;
            let value = parse_bool(&value)?;
            let mut settings = Settings::load(&db);
            settings.set(flag, value);
            settings.save(&db)?;
            println!("{flag} = {value}");
        }
        SettingsAction::Reset { yes } => {
            if !yes && !confirm_reset()? {
                println!("reset cancelled");
                return Ok(());
            }
            Settings::reset(&db)?;
            println!("settings reset to defaults");
        }
    }

    Ok(())
}
