//! Independent enable/disable feature pairs.
//!
//! Each module exposes an `enable` step and a `disable` (cleanup) step over
//! the shared surface, and both steps check pre-existing state before
//! creating anything, so the reconciliation engine can dispatch them any
//! number of times without accumulating duplicates.

pub mod colors;
pub mod confetti;
pub mod pomodoro;
pub mod progress;
pub mod quick_plus;
pub mod streak;
pub mod theme;
