//! Host application interface.
//!
//! The add-on layer never reaches for host globals. Everything it needs from
//! the study tracker -- subjects, sessions, save paths, derived-stats refresh,
//! user notification -- is injected through [`HostContext`]. Every capability
//! the host may not provide has a no-op default, so a missing host function
//! degrades the dependent feature instead of failing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A host-owned subject row. The core reads it and may extend it with a
/// color; it never defines or validates the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    /// Completed chapter count.
    pub completed: u32,
    /// Total chapter count.
    pub chapters: u32,
    /// Indicator color. Assigned once by the coloring feature and stable
    /// thereafter.
    #[serde(default)]
    pub color: Option<String>,
}

/// A host-owned study session. Read-only; used for the streak statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub ts: DateTime<Utc>,
}

/// Capabilities the host application exposes to the add-on layer.
pub trait HostContext {
    /// Current subject list, in display order.
    fn subjects(&self) -> Vec<Subject>;

    /// Persist the full subject list through the host's own save path.
    fn save_subjects(&mut self, subjects: &[Subject]);

    /// Recorded study sessions.
    fn sessions(&self) -> Vec<Session>;

    /// Completion percentage for one subject. Hosts with their own formula
    /// override this.
    fn compute_percent(&self, subject: &Subject) -> f64 {
        if subject.chapters == 0 {
            return 0.0;
        }
        f64::from(subject.completed.min(subject.chapters)) / f64::from(subject.chapters) * 100.0
    }

    /// Ask the host to refresh its derived stats and charts.
    fn refresh_stats(&mut self) {}

    /// Non-blocking user notification. The countdown never waits on it.
    fn notify(&mut self, _message: &str) {}
}

/// In-memory host backing tests and the CLI's host-state file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryHost {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub sessions: Vec<Session>,
    /// Times `refresh_stats` was invoked.
    #[serde(skip)]
    pub stats_refreshes: u32,
    /// Notifications delivered, oldest first.
    #[serde(skip)]
    pub notices: Vec<String>,
}

impl HostContext for MemoryHost {
    fn subjects(&self) -> Vec<Subject> {
        self.subjects.clone()
    }

    fn save_subjects(&mut self, subjects: &[Subject]) {
        self.subjects = subjects.to_vec();
    }

    fn sessions(&self) -> Vec<Session> {
        self.sessions.clone()
    }

    fn refresh_stats(&mut self) {
        self.stats_refreshes += 1;
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
