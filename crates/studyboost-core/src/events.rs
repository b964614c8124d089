use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every externally visible state change in the add-on layer produces an
/// Event. The embedding UI polls for them; the CLI prints them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AddonEvent {
    SettingsSaved {
        at: DateTime<Utc>,
    },
    SettingsReset {
        at: DateTime<Utc>,
    },
    /// Palette colors were assigned to subjects that lacked one.
    SubjectColorsAssigned {
        count: usize,
        at: DateTime<Utc>,
    },
    /// A "+1" control incremented a subject's completed count.
    QuickIncrement {
        subject_index: usize,
        completed: u32,
        at: DateTime<Utc>,
    },
    ConfettiSpawned {
        count: usize,
        at: DateTime<Utc>,
    },
    PomodoroStarted {
        work_secs: u64,
        break_secs: u64,
        at: DateTime<Utc>,
    },
    /// Work phase expired; the countdown moved to the break phase.
    WorkPhaseEnded {
        break_secs: u64,
        at: DateTime<Utc>,
    },
    /// Break phase expired; the countdown returned to idle.
    BreakPhaseEnded {
        at: DateTime<Utc>,
    },
    PomodoroStopped {
        at: DateTime<Utc>,
    },
}
