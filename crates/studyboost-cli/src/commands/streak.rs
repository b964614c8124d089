use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use studyboost_core::features::streak;
use studyboost_core::host::Session;

#[derive(Args)]
pub struct StreakArgs {
    /// JSON session log: an array of objects with a "ts" timestamp
    #[arg(long)]
    sessions: PathBuf,
    /// Print the bare day count instead of the tile text
    #[arg(long)]
    raw: bool,
}

pub fn run(args: StreakArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.sessions)?;
    let sessions: Vec<Session> = serde_json::from_str(&content)?;
    let days = streak::session_days(&sessions);
    let count = streak::streak_ending(&days, Local::now().date_naive());
    if args.raw {
        println!("{count}");
    } else {
        println!("Streak: {count}d");
    }
    Ok(())
}
