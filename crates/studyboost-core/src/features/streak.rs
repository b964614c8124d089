//! Consecutive-study-day streak.
//!
//! The streak counts consecutive local calendar days, ending today, with at
//! least one recorded session. Counting stops at the first gap; a day with
//! no session today yields zero.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};

use crate::host::{HostContext, Session};
use crate::surface::{StreakTile, Surface};

/// Distinct local calendar dates present among the session timestamps.
pub fn session_days(sessions: &[Session]) -> HashSet<NaiveDate> {
    sessions
        .iter()
        .map(|s| s.ts.with_timezone(&Local).date_naive())
        .collect()
}

/// Walk backwards from `today` while each date is present.
pub fn streak_ending(days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;
    while days.contains(&cursor) {
        streak += 1;
        cursor = match cursor.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }
    streak
}

/// Today's streak for the host's session log.
pub fn compute<H: HostContext>(host: &H) -> u32 {
    streak_ending(&session_days(&host.sessions()), Local::now().date_naive())
}

/// Create the statistic tile, or update its value if it already exists.
pub fn enable<H: HostContext>(host: &H, surface: &mut Surface) {
    let value = format!("{}d", compute(host));
    match &mut surface.streak_tile {
        Some(tile) => tile.value = value,
        None => {
            surface.streak_tile = Some(StreakTile {
                label: "Streak".to_string(),
                value,
            })
        }
    }
}

/// Remove the statistic tile.
pub fn disable(surface: &mut Surface) {
    surface.streak_tile = None;
}
