//! Per-screen state with stale-response protection
//!
//! Each session owns a [`RequestSequencer`](crate::RequestSequencer). Fetches
//! are split into `begin_*`, which issues a token, and `finish_*`, which applies
//! the result only if that token is still the latest. The `async` helpers do
//! both in one call for callers that await inline.

mod calculator;
mod guess;
mod roster;

pub use calculator::{CalculatorSession, Slot};
pub use guess::{DEFAULT_VOLUME, GuessSession};
pub use roster::RosterSession;

/// What happened to a finished fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Result applied to the session
    Applied,
    /// Error recorded; previous data kept
    Failed,
    /// A newer request was issued; result dropped
    Stale,
    /// Requested data was already loaded
    Unchanged,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied)
    }
}
