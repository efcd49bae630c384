//! Lower bound of the query window sent to the review API.

use crate::config::CursorPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollCursor {
    from_date: i64,
    policy: CursorPolicy,
}

impl PollCursor {
    pub fn new(from_date: i64, policy: CursorPolicy) -> Self {
        Self { from_date, policy }
    }

    /// Seconds since the Unix epoch to pass as `from_date`.
    pub fn from_date(&self) -> i64 {
        self.from_date
    }

    /// Record a successful cycle whose fetch started at `cycle_started`.
    ///
    /// Only [`CursorPolicy::Advance`] moves the cursor, and never backwards.
    pub fn on_success(&mut self, cycle_started: i64) {
        if self.policy == CursorPolicy::Advance {
            self.from_date = self.from_date.max(cycle_started);
        }
    }
}
