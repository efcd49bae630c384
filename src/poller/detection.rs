//! Change detection between poll cycles.

use std::collections::BTreeMap;

use crate::homework::{HomeworkRecord, HomeworkStatus};

/// Homework name to last known status.
pub type ReportState = BTreeMap<String, HomeworkStatus>;

/// Remembers the state of the last notification that was sent.
#[derive(Debug, Default)]
pub struct Detection {
    previous: ReportState,
}

impl Detection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known previous state.
    pub fn with_previous(previous: ReportState) -> Self {
        Self { previous }
    }

    pub fn previous(&self) -> &ReportState {
        &self.previous
    }

    /// Build this cycle's state from `record` and compare it with the last
    /// notified state. Returns the new state only when they differ.
    pub fn detect_change(&self, record: &HomeworkRecord) -> Option<ReportState> {
        let current = ReportState::from([(record.name.clone(), record.status)]);
        (current != self.previous).then_some(current)
    }

    /// Remember `current` as the state of the last sent notification.
    pub fn record_notified(&mut self, current: ReportState) {
        self.previous = current;
    }
}
