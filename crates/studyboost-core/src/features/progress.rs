//! Smooth progress-bar animation.
//!
//! Every bar gets a width transition toward its computed percentage, with a
//! per-row delay of `base + index * step` milliseconds so the bars do not
//! all move in lockstep.

use crate::host::HostContext;
use crate::storage::ProgressConfig;
use crate::surface::{Surface, Transition};

const EASE: &str = "cubic-bezier(.2,.9,.2,1)";

pub fn enable<H: HostContext>(host: &H, surface: &mut Surface, cfg: &ProgressConfig) {
    let subjects = host.subjects();
    for (idx, (row, subject)) in surface.rows.iter_mut().zip(&subjects).enumerate() {
        row.bar.width_pct = host.compute_percent(subject);
        row.bar.transition = Some(Transition {
            duration_ms: cfg.transition_ms,
            delay_ms: cfg.stagger_base_ms + idx as u64 * cfg.stagger_step_ms,
            curve: EASE.to_string(),
        });
    }
}

/// Remove the transition so width changes are instantaneous. The width
/// itself stays with the host's last render.
pub fn disable(surface: &mut Surface) {
    for row in &mut surface.rows {
        row.bar.transition = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryHost, Subject};

    fn host() -> MemoryHost {
        MemoryHost {
            subjects: vec![
                Subject {
                    name: "a".into(),
                    completed: 5,
                    chapters: 10,
                    color: None,
                },
                Subject {
                    name: "b".into(),
                    completed: 10,
                    chapters: 10,
                    color: None,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn stagger_grows_per_row() {
        let host = host();
        let mut surface = Surface::default();
        surface.sync_rows(2);
        enable(&host, &mut surface, &ProgressConfig::default());
        let delays: Vec<u64> = surface
            .rows
            .iter()
            .map(|r| r.bar.transition.as_ref().unwrap().delay_ms)
            .collect();
        assert_eq!(delays, vec![40, 80]);
        assert_eq!(surface.rows[0].bar.width_pct, 50.0);
        assert_eq!(surface.rows[1].bar.width_pct, 100.0);
    }

    #[test]
    fn disable_strips_transition_only() {
        let host = host();
        let mut surface = Surface::default();
        surface.sync_rows(2);
        enable(&host, &mut surface, &ProgressConfig::default());
        disable(&mut surface);
        assert!(surface.rows.iter().all(|r| r.bar.transition.is_none()));
        assert_eq!(surface.rows[1].bar.width_pct, 100.0);
    }
}
