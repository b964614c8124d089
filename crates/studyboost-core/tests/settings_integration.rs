//! Durable settings behavior against a real on-disk database file.

use studyboost_core::settings::SETTINGS_KEY;
use studyboost_core::{Addons, Config, Database, Flag, MemoryHost, Settings};

fn temp_db(dir: &tempfile::TempDir) -> Database {
    Database::open_at(&dir.path().join("studyboost.db")).unwrap()
}

#[test]
fn record_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studyboost.db");

    {
        let db = Database::open_at(&path).unwrap();
        let mut settings = Settings::default();
        settings.set(Flag::Pomodoro, true);
        settings.set(Flag::Confetti, false);
        settings.save(&db).unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let loaded = Settings::load(&db);
    assert!(loaded.pomodoro);
    assert!(!loaded.confetti);
    assert!(loaded.streaks);
}

#[test]
fn missing_entry_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir);
    assert_eq!(Settings::load(&db), Settings::default());
}

#[test]
fn corrupted_entry_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir);
    db.kv_set(SETTINGS_KEY, "{\"animatedProgress\": \"maybe\"").unwrap();
    assert_eq!(Settings::load(&db), Settings::default());
}

#[test]
fn partial_entry_fills_per_field_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir);
    db.kv_set(SETTINGS_KEY, r#"{"lightTheme":true,"legacyKey":1}"#)
        .unwrap();
    let loaded = Settings::load(&db);
    assert!(loaded.light_theme);
    assert!(loaded.animated_progress);
    assert!(!loaded.pomodoro);
}

#[test]
fn save_through_addons_persists_and_reconciles() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir);

    let mut addons = Addons::new(MemoryHost::default(), Settings::default(), Config::default());
    addons.set_flag(Flag::LightTheme, true);
    addons.set_flag(Flag::Streaks, false);
    addons.save_settings(&db).unwrap();

    assert_eq!(
        addons.surface().theme,
        studyboost_core::surface::Theme::Light
    );
    assert!(addons.surface().streak_tile.is_none());

    let loaded = Settings::load(&db);
    assert!(loaded.light_theme);
    assert!(!loaded.streaks);
}

#[test]
fn reset_through_addons_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let db = temp_db(&dir);

    let settings = Settings {
        light_theme: true,
        streaks: false,
        ..Settings::default()
    };
    let mut addons = Addons::new(MemoryHost::default(), settings, Config::default());
    addons.save_settings(&db).unwrap();

    addons.reset_settings(&db).unwrap();
    assert_eq!(*addons.settings(), Settings::default());
    assert_eq!(Settings::load(&db), Settings::default());
    assert_eq!(
        addons.surface().theme,
        studyboost_core::surface::Theme::Dark
    );
    assert!(addons.surface().streak_tile.is_some());
}
