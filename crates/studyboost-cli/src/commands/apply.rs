use std::path::PathBuf;

use clap::Args;
use studyboost_core::storage::Database;
use studyboost_core::{Addons, Config, MemoryHost, Settings};

#[derive(Args)]
pub struct ApplyArgs {
    /// JSON host state: subjects and session log
    #[arg(long)]
    state: PathBuf,
    /// Write the reconciled host state back to the file
    #[arg(long)]
    write: bool,
    /// Also print the events the pass produced
    #[arg(long)]
    events: bool,
    /// Seed for confetti randomness
    #[arg(long)]
    seed: Option<u64>,
}

pub fn run(args: ApplyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let settings = Settings::load(&db);
    let config = Config::load_or_default();

    let content = std::fs::read_to_string(&args.state)?;
    let host: MemoryHost = serde_json::from_str(&content)?;

    let mut addons = Addons::new(host, settings, config);
    if let Some(seed) = args.seed {
        addons = addons.with_seed(seed);
    }
    addons.apply();

    println!("{}", serde_json::to_string_pretty(addons.surface())?);
    if args.events {
        let events = addons.drain_events();
        println!("{}", serde_json::to_string_pretty(&events)?);
    }

    if args.write {
        let json = serde_json::to_string_pretty(addons.host())?;
        std::fs::write(&args.state, json)?;
    }

    Ok(())
}
