//! Reconciliation engine.
//!
//! [`Addons::apply`] brings the surface into the state implied by the
//! current settings: for each of the seven flags it runs the feature's
//! enable step or its cleanup step, then asks the host to refresh derived
//! stats once. The pass is idempotent -- every step checks pre-existing
//! surface state before creating anything, so running it twice in a row
//! with unchanged settings yields an identical surface.
//!
//! The host drives re-runs through two explicit change hooks instead of the
//! engine observing host internals: [`Addons::subjects_changed`] after a
//! subject-list repaint and [`Addons::session_saved`] after the host
//! persists its session log. Back-to-back invocations are expected and
//! harmless.

use chrono::Utc;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::countdown::Countdown;
use crate::error::Result;
use crate::events::AddonEvent;
use crate::features::{colors, confetti, pomodoro, progress, quick_plus, streak, theme};
use crate::host::HostContext;
use crate::settings::{Flag, Settings};
use crate::storage::{Config, Database};
use crate::surface::{HostControls, Surface};

/// The add-on layer: settings, surface, countdown and the host context,
/// glued together by the reconciliation pass.
pub struct Addons<H: HostContext> {
    host: H,
    settings: Settings,
    surface: Surface,
    countdown: Countdown,
    config: Config,
    rng: Pcg32,
    hooks_installed: bool,
    events: Vec<AddonEvent>,
}

impl<H: HostContext> Addons<H> {
    pub fn new(host: H, settings: Settings, config: Config) -> Self {
        Self {
            host,
            settings,
            surface: Surface::default(),
            countdown: Countdown::new(),
            config,
            rng: Pcg32::from_entropy(),
            hooks_installed: false,
            events: Vec::new(),
        }
    }

    /// Deterministic confetti randomness, for tests and replays.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Pcg32::seed_from_u64(seed);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Toggle a flag in memory only. Durable storage and downstream effects
    /// update on [`Addons::save_settings`].
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.settings.set(flag, value);
    }

    /// Drain events produced since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<AddonEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Change hooks ─────────────────────────────────────────────────

    /// Mark the host hooks as registered. Returns false when already
    /// installed, so an embedder wiring callbacks twice can skip the
    /// second registration.
    pub fn install_hooks(&mut self) -> bool {
        if self.hooks_installed {
            return false;
        }
        self.hooks_installed = true;
        true
    }

    /// Host repainted or reordered its subject list.
    pub fn subjects_changed(&mut self) {
        self.apply();
    }

    /// Host persisted its session log (the main save action).
    pub fn session_saved(&mut self) {
        if self.settings.confetti {
            self.burst_confetti();
        }
        self.apply();
    }

    // ── Settings lifecycle ───────────────────────────────────────────

    /// Persist the current record wholesale, then reconcile.
    pub fn save_settings(&mut self, db: &Database) -> Result<()> {
        self.settings.save(db)?;
        self.events.push(AddonEvent::SettingsSaved { at: Utc::now() });
        self.apply();
        Ok(())
    }

    /// Replace the record with defaults, persist, then reconcile. The
    /// caller is responsible for user confirmation before invoking this.
    pub fn reset_settings(&mut self, db: &Database) -> Result<()> {
        self.settings = Settings::reset(db)?;
        self.events.push(AddonEvent::SettingsReset { at: Utc::now() });
        self.apply();
        Ok(())
    }

    // ── Reconciliation ───────────────────────────────────────────────

    /// Bring the surface into the state implied by the current settings.
    /// Safe to run any number of times, in any order relative to host
    /// repaints.
    pub fn apply(&mut self) {
        self.surface.sync_rows(self.host.subjects().len());

        if self.settings.light_theme {
            theme::enable(&mut self.surface);
        } else {
            theme::disable(&mut self.surface);
        }

        if self.settings.subject_colors {
            let assigned = colors::enable(&mut self.host, &mut self.surface, &self.config.palette);
            if assigned > 0 {
                self.events.push(AddonEvent::SubjectColorsAssigned {
                    count: assigned,
                    at: Utc::now(),
                });
            }
        } else {
            colors::disable(&mut self.surface);
        }

        if self.settings.animated_progress {
            progress::enable(&self.host, &mut self.surface, &self.config.progress);
        } else {
            progress::disable(&mut self.surface);
        }

        if self.settings.quick_plus {
            quick_plus::enable(&mut self.surface);
        } else {
            quick_plus::disable(&mut self.surface);
        }

        // Confetti is additive-only; reconciliation just sweeps out pieces
        // whose lifetime has elapsed.
        confetti::sweep(&mut self.surface, now_ms());

        if self.settings.streaks {
            streak::enable(&self.host, &mut self.surface);
        } else {
            streak::disable(&mut self.surface);
        }

        if self.settings.pomodoro {
            pomodoro::enable(
                &mut self.surface,
                &self.config.pomodoro.presets,
                self.countdown.is_running(),
            );
        } else if let Some(ev) = pomodoro::disable(&mut self.surface, &mut self.countdown) {
            self.events.push(ev);
        }

        self.host.refresh_stats();
    }

    // ── Quick increment ──────────────────────────────────────────────

    /// A click on a row's "+1" control.
    pub fn quick_increment(&mut self, index: usize) {
        if !self.settings.quick_plus {
            return;
        }
        if let Some(ev) = quick_plus::click(&mut self.host, index) {
            self.events.push(ev);
        }
        self.apply();
    }

    // ── Countdown control ────────────────────────────────────────────

    /// Start a work/break cycle. Any previous countdown is cancelled first.
    /// Disables the host's own start/pause/save controls until idle again.
    pub fn pomodoro_start(&mut self, work_secs: u64, break_secs: u64) {
        if !self.settings.pomodoro {
            return;
        }
        let ev = self.countdown.start(work_secs, break_secs);
        self.events.push(ev);
        self.surface.controls = HostControls {
            start_enabled: false,
            pause_enabled: false,
            save_enabled: false,
        };
        if let Some(panel) = &mut self.surface.pomodoro_panel {
            panel.running = true;
        }
        self.surface.time_display = self.countdown.display();
    }

    /// Explicit stop: cancel the tick, zero the counter, re-enable the
    /// host controls, regardless of phase.
    pub fn pomodoro_stop(&mut self) {
        let ev = self.countdown.stop();
        self.events.push(ev);
        self.surface.controls = HostControls::default();
        if let Some(panel) = &mut self.surface.pomodoro_panel {
            panel.running = false;
        }
        self.surface.time_display = self.countdown.display();
    }

    /// Advance the countdown one second and rerender the time display.
    /// Phase-boundary notifications go through the host's non-blocking
    /// notify capability; the tick never waits for acknowledgment.
    pub fn pomodoro_tick(&mut self) {
        if let Some(ev) = self.countdown.tick() {
            let work_ended = matches!(ev, AddonEvent::WorkPhaseEnded { .. });
            let break_ended = matches!(ev, AddonEvent::BreakPhaseEnded { .. });
            self.events.push(ev);
            if work_ended {
                if self.settings.confetti {
                    self.burst_confetti();
                }
                self.host
                    .notify("Work session complete -- time for a break!");
            }
            if break_ended {
                self.host.notify("Break over -- back to work!");
                self.surface.controls = HostControls::default();
                if let Some(panel) = &mut self.surface.pomodoro_panel {
                    panel.running = false;
                }
            }
        }
        self.surface.time_display = self.countdown.display();
        confetti::sweep(&mut self.surface, now_ms());
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn burst_confetti(&mut self) {
        let count = confetti::spawn(
            &mut self.surface,
            &self.config.confetti,
            &mut self.rng,
            now_ms(),
        );
        self.events
            .push(AddonEvent::ConfettiSpawned { count, at: Utc::now() });
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
