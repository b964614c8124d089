//! Pomodoro panel near the host's timer pane.
//!
//! The panel carries the preset selector and start/stop controls; the actual
//! counting lives in [`crate::countdown`]. Removing the panel force-stops
//! any active countdown so no ticker outlives its UI.

use crate::countdown::{Countdown, Preset};
use crate::events::AddonEvent;
use crate::surface::{HostControls, PomodoroPanel, Surface};

/// Attach the panel if absent; otherwise just refresh its running flag.
pub fn enable(surface: &mut Surface, presets: &[Preset], running: bool) {
    match &mut surface.pomodoro_panel {
        Some(panel) => panel.running = running,
        None => {
            surface.pomodoro_panel = Some(PomodoroPanel {
                presets: presets.to_vec(),
                selected: 0,
                running,
            })
        }
    }
}

/// Remove the panel and force-stop any active countdown, restoring the
/// host's own controls.
pub fn disable(surface: &mut Surface, countdown: &mut Countdown) -> Option<AddonEvent> {
    surface.pomodoro_panel = None;
    if !countdown.is_running() {
        return None;
    }
    let ev = countdown.stop();
    surface.controls = HostControls::default();
    surface.time_display = countdown.display();
    Some(ev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::Phase;
    use crate::storage::PomodoroConfig;

    #[test]
    fn attach_is_idempotent() {
        let mut surface = Surface::default();
        let presets = PomodoroConfig::default().presets;
        enable(&mut surface, &presets, false);
        enable(&mut surface, &presets, true);
        let panel = surface.pomodoro_panel.as_ref().unwrap();
        assert_eq!(panel.presets.len(), 3);
        assert!(panel.running);
    }

    #[test]
    fn detach_force_stops_countdown() {
        let mut surface = Surface::default();
        let mut countdown = Countdown::new();
        enable(&mut surface, &PomodoroConfig::default().presets, false);
        countdown.start(60, 30);
        surface.controls.start_enabled = false;

        let ev = disable(&mut surface, &mut countdown);
        assert!(matches!(ev, Some(AddonEvent::PomodoroStopped { .. })));
        assert!(surface.pomodoro_panel.is_none());
        assert_eq!(countdown.phase(), Phase::Idle);
        assert!(surface.controls.start_enabled);
        assert_eq!(surface.time_display, "00:00:00");
    }

    #[test]
    fn detach_when_idle_emits_nothing() {
        let mut surface = Surface::default();
        let mut countdown = Countdown::new();
        assert!(disable(&mut surface, &mut countdown).is_none());
    }
}
