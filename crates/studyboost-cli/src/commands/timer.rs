use clap::Subcommand;
use studyboost_core::countdown::{Countdown, Phase, Preset};
use studyboost_core::storage::Database;
use studyboost_core::Settings;

const COUNTDOWN_KEY: &str = "countdown_state";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a work/break cycle
    Start {
        /// Preset as WORK:BREAK minutes (e.g. "25:5")
        #[arg(long, default_value = "25:5")]
        preset: String,
    },
    /// Stop the countdown and return to idle
    Stop,
    /// Advance the countdown by one second
    Tick,
    /// Print the current countdown state as JSON
    Status,
    /// Drive the countdown in the foreground, one tick per second
    Run {
        /// Preset as WORK:BREAK minutes (e.g. "25:5")
        #[arg(long, default_value = "25:5")]
        preset: String,
    },
}

fn load_countdown(db: &Database) -> Countdown {
    if let Ok(Some(json)) = db.kv_get(COUNTDOWN_KEY) {
        if let Ok(countdown) = serde_json::from_str::<Countdown>(&json) {
            return countdown;
        }
    }
    Countdown::new()
}

fn save_countdown(db: &Database, countdown: &Countdown) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(countdown)?;
    db.kv_set(COUNTDOWN_KEY, &json)?;
    Ok(())
}

fn print_status(countdown: &Countdown) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "phase": countdown.phase(),
            "remaining_secs": countdown.remaining_secs(),
            "display": countdown.display(),
            "running": countdown.is_running(),
        }))?
    );
    Ok(())
}

fn require_pomodoro_flag(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    if !Settings::load(db).pomodoro {
        return Err("pomodoro is disabled; enable it with: settings set pomodoro true".into());
    }
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut countdown = load_countdown(&db);

    match action {
        TimerAction::Start { preset } => {
            require_pomodoro_flag(&db)?;
            let preset: Preset = preset.parse()?;
            let event = countdown.start(preset.work_secs(), preset.break_secs());
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Stop => {
            let event = countdown.stop();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Tick => {
            if let Some(event) = countdown.tick() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                print_status(&countdown)?;
            }
        }
        TimerAction::Status => {
            print_status(&countdown)?;
        }
        TimerAction::Run { preset } => {
            require_pomodoro_flag(&db)?;
            let preset: Preset = preset.parse()?;
            countdown.start(preset.work_secs(), preset.break_secs());
            run_foreground(&mut countdown)?;
        }
    }

    save_countdown(&db, &countdown)?;
    Ok(())
}

/// Tick once per second until the break phase expires.
fn run_foreground(countdown: &mut Countdown) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            let boundary = countdown.tick();
            print!("\r{}  ", countdown.display());
            use std::io::Write;
            std::io::stdout().flush().ok();
            if let Some(event) = boundary {
                println!();
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            if countdown.phase() == Phase::Idle {
                break;
            }
        }
        Ok(())
    })
}
