//! Presentation state holders, one per screen.
//!
//! # Responsibility
//! - Orchestrate use-case calls per screen and publish the latest result.
//! - Re-run the full fetch after every successful mutation so the published
//!   value always reflects current store state.
//!
//! # Invariants
//! - Publication is a single-slot watch channel: last value wins, new
//!   subscribers observe the current value immediately, no history replay.
//! - A failed fetch or mutation travels on the `Result` of the triggering
//!   call; the published slot is never used to signal errors.

use chrono::{DateTime, Local, Utc};

pub mod exercise_screen;
pub mod sleep_screen;
pub mod user_screen;

/// Published lifecycle of a screen's data slot.
///
/// `Uninitialized` only exists before the constructor's initial fetch has
/// published; mutations cycle `Loaded -> Loading -> Loaded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    Uninitialized,
    Loading,
    Loaded(T),
}

impl<T> ScreenState<T> {
    /// Returns the loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Renders an absolute instant in the reader's wall clock, for display only.
///
/// Storage and domain objects never hold local time; this boundary is the
/// single place the local zone enters.
pub fn local_wall_clock(instant: DateTime<Utc>) -> DateTime<Local> {
    instant.with_timezone(&Local)
}
