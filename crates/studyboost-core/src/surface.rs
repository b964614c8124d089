//! Retained view model of the host UI.
//!
//! The reconciliation engine paints this model instead of a live widget
//! tree; the embedder mirrors it into whatever it actually renders. Keeping
//! the model equality-comparable makes the engine's idempotence contract
//! directly assertable: applying the same settings twice must produce an
//! identical `Surface`.

use serde::{Deserialize, Serialize};

use crate::countdown::Preset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

/// A CSS-style width transition on a progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_ms: u64,
    /// Per-row stagger so bars do not all move in lockstep.
    pub delay_ms: u64,
    pub curve: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgressBar {
    pub width_pct: f64,
    /// Fill color; `None` renders the host's neutral fill.
    pub fill: Option<String>,
    /// `None` means width changes are instantaneous.
    pub transition: Option<Transition>,
}

/// Add-on decoration state for one subject row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubjectRow {
    /// Indicator paint; `None` is the neutral color.
    pub indicator: Option<String>,
    pub bar: ProgressBar,
    /// Whether the "+1" control is attached.
    pub quick_plus: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakTile {
    pub label: String,
    /// Day count suffixed "d", e.g. "3d".
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroPanel {
    pub presets: Vec<Preset>,
    pub selected: usize,
    pub running: bool,
}

/// One short-lived decorative particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfettiPiece {
    pub glyph: String,
    pub left_pct: f64,
    pub top_pct: f64,
    pub font_px: f64,
    /// Epoch milliseconds after which the piece self-removes.
    pub expires_at_ms: u64,
}

/// Enabled state of the host's own timer controls. The countdown disables
/// them while running and re-enables them on return to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostControls {
    pub start_enabled: bool,
    pub pause_enabled: bool,
    pub save_enabled: bool,
}

impl Default for HostControls {
    fn default() -> Self {
        Self {
            start_enabled: true,
            pause_enabled: true,
            save_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub theme: Theme,
    /// One entry per host subject row, same order as the host list.
    pub rows: Vec<SubjectRow>,
    pub streak_tile: Option<StreakTile>,
    pub pomodoro_panel: Option<PomodoroPanel>,
    pub confetti: Vec<ConfettiPiece>,
    pub controls: HostControls,
    /// Zero-padded HH:MM:SS shown in the host's time display.
    pub time_display: String,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            rows: Vec::new(),
            streak_tile: None,
            pomodoro_panel: None,
            confetti: Vec::new(),
            controls: HostControls::default(),
            time_display: "00:00:00".to_string(),
        }
    }
}

impl Surface {
    /// Match the row count to the host's subject list. Rows for removed
    /// subjects are dropped; new subjects start undecorated.
    pub fn sync_rows(&mut self, count: usize) {
        self.rows.resize_with(count, SubjectRow::default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_rows_grows_and_shrinks() {
        let mut surface = Surface::default();
        surface.sync_rows(3);
        assert_eq!(surface.rows.len(), 3);
        surface.rows[0].quick_plus = true;
        surface.sync_rows(1);
        assert_eq!(surface.rows.len(), 1);
        assert!(surface.rows[0].quick_plus);
    }

    #[test]
    fn default_controls_enabled() {
        let surface = Surface::default();
        assert!(surface.controls.start_enabled);
        assert!(surface.controls.pause_enabled);
        assert!(surface.controls.save_enabled);
        assert_eq!(surface.time_display, "00:00:00");
    }
}
