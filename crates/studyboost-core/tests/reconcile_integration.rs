//! Integration tests for the reconciliation pass: idempotence across the
//! whole flag space, color stability across host repaints, and write-back
//! through the host context.

use proptest::prelude::*;

use chrono::{Duration, Utc};
use studyboost_core::host::Session;
use studyboost_core::{Addons, Config, Flag, MemoryHost, Settings, Subject};

fn three_subjects() -> MemoryHost {
    MemoryHost {
        subjects: vec![
            Subject {
                name: "math".into(),
                completed: 3,
                chapters: 12,
                color: None,
            },
            Subject {
                name: "physics".into(),
                completed: 8,
                chapters: 8,
                color: None,
            },
            Subject {
                name: "history".into(),
                completed: 0,
                chapters: 5,
                color: None,
            },
        ],
        ..Default::default()
    }
}

#[test]
fn default_pass_decorates_everything() {
    let mut addons = Addons::new(three_subjects(), Settings::default(), Config::default());
    addons.apply();
    let surface = addons.surface();

    assert_eq!(surface.rows.len(), 3);
    for row in &surface.rows {
        assert!(row.indicator.is_some());
        assert!(row.bar.fill.is_some());
        assert!(row.bar.transition.is_some());
        assert!(row.quick_plus);
    }
    assert_eq!(surface.rows[0].bar.width_pct, 25.0);
    assert_eq!(surface.rows[1].bar.width_pct, 100.0);
    assert_eq!(surface.rows[2].bar.width_pct, 0.0);
    assert!(surface.streak_tile.is_some());
    assert!(surface.pomodoro_panel.is_none());
}

#[test]
fn colors_write_back_through_host_save_path() {
    let mut addons = Addons::new(three_subjects(), Settings::default(), Config::default());
    addons.apply();
    let palette = Config::default().palette;
    for (i, subject) in addons.host().subjects.iter().enumerate() {
        assert_eq!(subject.color.as_deref(), Some(palette[i].as_str()));
    }
}

#[test]
fn colors_stay_stable_across_repaints() {
    let mut addons = Addons::new(three_subjects(), Settings::default(), Config::default());
    addons.apply();
    let before: Vec<_> = addons
        .host()
        .subjects
        .iter()
        .map(|s| s.color.clone())
        .collect();

    addons.subjects_changed();
    addons.subjects_changed();
    let after: Vec<_> = addons
        .host()
        .subjects
        .iter()
        .map(|s| s.color.clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn disabling_colors_keeps_stored_assignment() {
    let mut addons = Addons::new(three_subjects(), Settings::default(), Config::default());
    addons.apply();
    addons.set_flag(Flag::SubjectColors, false);
    addons.apply();

    assert!(addons.surface().rows.iter().all(|r| r.indicator.is_none()));
    assert!(addons.host().subjects.iter().all(|s| s.color.is_some()));

    // Re-enabling reuses the stored colors instead of assigning fresh ones.
    let stored: Vec<_> = addons
        .host()
        .subjects
        .iter()
        .map(|s| s.color.clone())
        .collect();
    addons.drain_events();
    addons.set_flag(Flag::SubjectColors, true);
    addons.apply();
    assert!(!addons
        .drain_events()
        .iter()
        .any(|e| matches!(e, studyboost_core::AddonEvent::SubjectColorsAssigned { .. })));
    let after: Vec<_> = addons
        .host()
        .subjects
        .iter()
        .map(|s| s.color.clone())
        .collect();
    assert_eq!(stored, after);
}

#[test]
fn quick_increment_clamps_and_repaints() {
    let mut addons = Addons::new(three_subjects(), Settings::default(), Config::default());
    addons.apply();

    // physics is already at its chapter count; clicks must not exceed it.
    addons.quick_increment(1);
    assert_eq!(addons.host().subjects[1].completed, 8);
    assert_eq!(addons.surface().rows[1].bar.width_pct, 100.0);

    addons.quick_increment(0);
    assert_eq!(addons.host().subjects[0].completed, 4);
    let pct = addons.surface().rows[0].bar.width_pct;
    assert!((pct - 4.0 / 12.0 * 100.0).abs() < 1e-9);
}

#[test]
fn streak_tile_counts_consecutive_days() {
    let now = Utc::now();
    let host = MemoryHost {
        subjects: three_subjects().subjects,
        sessions: vec![
            Session { ts: now },
            Session { ts: now - Duration::days(1) },
            // gap: no session two days ago
            Session { ts: now - Duration::days(3) },
        ],
        ..Default::default()
    };
    let mut addons = Addons::new(host, Settings::default(), Config::default());
    addons.apply();
    assert_eq!(
        addons.surface().streak_tile.as_ref().unwrap().value,
        "2d"
    );
}

#[test]
fn stats_refresh_runs_once_per_pass() {
    let mut addons = Addons::new(three_subjects(), Settings::default(), Config::default());
    addons.apply();
    addons.apply();
    addons.subjects_changed();
    assert_eq!(addons.host().stats_refreshes, 3);
}

proptest! {
    // Reconciling twice under any flag combination must leave the surface
    // exactly where the first pass left it.
    #[test]
    fn double_apply_is_identical(flags in proptest::array::uniform7(any::<bool>())) {
        let settings = Settings {
            animated_progress: flags[0],
            subject_colors: flags[1],
            pomodoro: flags[2],
            streaks: flags[3],
            confetti: flags[4],
            quick_plus: flags[5],
            light_theme: flags[6],
        };
        let mut addons = Addons::new(three_subjects(), settings, Config::default()).with_seed(11);
        addons.apply();
        let first = addons.surface().clone();
        addons.apply();
        prop_assert_eq!(&first, addons.surface());
    }

    // Change hooks reuse the same pass, so firing them repeatedly in any
    // interleaving converges to the same surface as a single pass.
    #[test]
    fn hooks_converge(order in proptest::collection::vec(any::<bool>(), 1..6)) {
        let mut addons = Addons::new(three_subjects(), Settings::default(), Config::default())
            .with_seed(12);
        addons.apply();
        let baseline = {
            let mut s = addons.surface().clone();
            s.confetti.clear();
            s
        };
        for subjects in order {
            if subjects {
                addons.subjects_changed();
            } else {
                addons.session_saved();
            }
        }
        let mut end = addons.surface().clone();
        end.confetti.clear();
        prop_assert_eq!(baseline, end);
    }
}
