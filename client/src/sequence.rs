//! Request tokens for discarding superseded responses

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Hands out increasing tokens; only the most recent one is current
///
/// Clones share the counter, so a spawned task can check whether its result
/// is still wanted before handing it back.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token, superseding every earlier one
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Make every outstanding token stale
    pub fn invalidate(&self) {
        self.issue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        assert!(sequencer.is_current(first));

        let second = sequencer.issue();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_clones_share_counter() {
        let sequencer = RequestSequencer::new();
        let shared = sequencer.clone();

        let token = sequencer.issue();
        shared.invalidate();
        assert!(!sequencer.is_current(token));
    }
}
