use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyboost-cli", version, about = "StudyBoost add-ons CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feature-flag settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Pomodoro countdown control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Study streak from a session log
    Streak(commands::streak::StreakArgs),
    /// Run one reconciliation pass over a host state file
    Apply(commands::apply::ApplyArgs),
    /// Cosmetic configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Streak(args) => commands::streak::run(args),
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
