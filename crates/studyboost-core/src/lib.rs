//! # Studyboost Core Library
//!
//! This library provides the core logic for Studyboost, an add-on layer for a
//! study-tracking application. The add-on layer toggles cosmetic and
//! behavioral features on and off, persists the toggle state, and keeps a
//! retained view model of the host UI consistent with that state even as the
//! host repaints its own content.
//!
//! ## Architecture
//!
//! - **Settings**: a fixed-shape feature-flag record persisted as a single
//!   key-value entry, with safe defaults on absence or corruption
//! - **Reconciliation**: an idempotent `apply` pass that dispatches each of
//!   the seven feature modules against the surface
//! - **Countdown**: a two-phase (work/break) state machine driven by a
//!   one-second tick the caller supplies
//! - **Host context**: the study tracker's subjects, sessions, save paths
//!   and notification channel, injected through a trait so the core never
//!   reaches for host globals
//!
//! ## Key Components
//!
//! - [`Addons`]: reconciliation engine and change-hook entry points
//! - [`Settings`]: the seven-flag record and its store
//! - [`Countdown`]: pomodoro state machine
//! - [`HostContext`]: capability interface to the host application

pub mod countdown;
pub mod error;
pub mod events;
pub mod features;
pub mod host;
pub mod reconcile;
pub mod settings;
pub mod storage;
pub mod surface;

pub use countdown::{Countdown, Phase, Preset};
pub use error::{AddonError, Result};
pub use events::AddonEvent;
pub use host::{HostContext, MemoryHost, Session, Subject};
pub use reconcile::Addons;
pub use settings::{Flag, Settings};
pub use storage::{Config, Database};
pub use surface::{Surface, Theme};
