//! Countdown state machine (pomodoro).
//!
//! Two alternating phases driven by a single one-second tick. The machine
//! does not own a thread or an interval -- the caller ticks it once per
//! second, as the CLI's `timer run` loop does.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Work -> Break -> Idle
//!   ^______________________|  (explicit stop from any phase)
//! ```
//!
//! Starting always cancels any previous countdown first: at most one ticker
//! is active at any time. Each start issues a fresh ticket so a stale driver
//! holding an old ticket can never advance the machine.

use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{AddonError, Result};
use crate::events::AddonEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Work,
    Break,
}

/// A work/break duration pair in minutes, e.g. the stock 25/5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub work_min: u64,
    pub break_min: u64,
}

impl Preset {
    pub fn work_secs(&self) -> u64 {
        self.work_min.saturating_mul(60)
    }

    pub fn break_secs(&self) -> u64 {
        self.break_min.saturating_mul(60)
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.work_min, self.break_min)
    }
}

impl FromStr for Preset {
    type Err = AddonError;

    /// Parses the "25:5" form.
    fn from_str(s: &str) -> Result<Self> {
        let (work, brk) = s
            .split_once(':')
            .ok_or_else(|| AddonError::InvalidValue(format!("preset must be WORK:BREAK: {s}")))?;
        let work_min = work
            .trim()
            .parse()
            .map_err(|_| AddonError::InvalidValue(format!("bad work minutes: {s}")))?;
        let break_min = brk
            .trim()
            .parse()
            .map_err(|_| AddonError::InvalidValue(format!("bad break minutes: {s}")))?;
        Ok(Self { work_min, break_min })
    }
}

/// The two-phase countdown machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    phase: Phase,
    remaining_secs: u64,
    work_secs: u64,
    break_secs: u64,
    /// Ticket of the single active ticker, if any.
    ticker: Option<u64>,
    next_ticket: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            remaining_secs: 0,
            work_secs: 0,
            break_secs: 0,
            ticker: None,
            next_ticket: 1,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Ticket of the active ticker. Changes on every start.
    pub fn ticket(&self) -> Option<u64> {
        self.ticker
    }

    /// Zero-padded HH:MM:SS of the remaining counter.
    pub fn display(&self) -> String {
        let s = self.remaining_secs;
        format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a work/break cycle. Any previous countdown is fully cancelled
    /// first, so at most one ticker is ever active.
    pub fn start(&mut self, work_secs: u64, break_secs: u64) -> AddonEvent {
        self.ticker = None;
        self.phase = Phase::Work;
        self.work_secs = work_secs;
        self.break_secs = break_secs;
        self.remaining_secs = work_secs;
        self.ticker = Some(self.next_ticket);
        self.next_ticket += 1;
        AddonEvent::PomodoroStarted {
            work_secs,
            break_secs,
            at: Utc::now(),
        }
    }

    /// Cancel immediately: no ticker, zero counter, back to idle.
    pub fn stop(&mut self) -> AddonEvent {
        self.ticker = None;
        self.phase = Phase::Idle;
        self.remaining_secs = 0;
        AddonEvent::PomodoroStopped { at: Utc::now() }
    }

    /// Advance one second. Returns the boundary event when the counter
    /// expires. A tick with no active ticker is a no-op.
    pub fn tick(&mut self) -> Option<AddonEvent> {
        self.ticker?;
        match self.phase {
            Phase::Idle => None,
            Phase::Work => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs > 0 {
                    return None;
                }
                self.phase = Phase::Break;
                self.remaining_secs = self.break_secs;
                Some(AddonEvent::WorkPhaseEnded {
                    break_secs: self.break_secs,
                    at: Utc::now(),
                })
            }
            Phase::Break => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs > 0 {
                    return None;
                }
                self.stop();
                Some(AddonEvent::BreakPhaseEnded { at: Utc::now() })
            }
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}
