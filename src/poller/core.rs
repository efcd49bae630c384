//! Core poll loop: fetch, validate, translate, detect, notify, sleep.

use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use tracing::{debug, error};

use crate::api::{check_response, StatusSource};
use crate::config::Settings;
use crate::error::CycleError;
use crate::homework::HomeworkRecord;
use crate::notifier::{deliver, Notifier};

use super::cursor::PollCursor;
use super::detection::Detection;

/// What a successful cycle decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API returned an empty `homeworks` list.
    NoHomeworks,
    /// The latest homework has the status that was last notified.
    Unchanged,
    /// A change was detected and a message handed to the notifier.
    Notified { message: String },
}

/// Drives poll cycles against a status source and a notifier.
///
/// Runs on a single thread; one cycle finishes before the next begins.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    chat_id: String,
    retry_period: Duration,
    cursor: PollCursor,
    detection: Detection,
}

impl<S: StatusSource, N: Notifier> Poller<S, N> {
    /// Create a poller whose cursor starts at now minus the configured lookback.
    ///
    /// A lookback reaching past the Unix epoch starts the cursor at zero.
    pub fn new(settings: &Settings, source: S, notifier: N) -> Self {
        let lookback = i64::try_from(settings.lookback_secs).unwrap_or(i64::MAX);
        let start = now_timestamp().saturating_sub(lookback).max(0);
        Self::with_cursor(
            settings,
            source,
            notifier,
            PollCursor::new(start, settings.cursor_policy),
        )
    }

    pub fn with_cursor(settings: &Settings, source: S, notifier: N, cursor: PollCursor) -> Self {
        Self {
            source,
            notifier,
            chat_id: settings.credentials.chat_id.clone(),
            retry_period: settings.retry_period,
            cursor,
            detection: Detection::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn cursor(&self) -> &PollCursor {
        &self.cursor
    }

    pub fn detection(&self) -> &Detection {
        &self.detection
    }

    /// Run one fetch/validate/translate/detect/notify cycle.
    ///
    /// Only the first element of `homeworks` is inspected. A failed delivery
    /// still counts as notified; delivery errors never reach this level.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        let cycle_started = now_timestamp();

        let response = self.source.fetch(self.cursor.from_date())?;
        let homeworks = check_response(&response)?;

        let outcome = match homeworks.first() {
            None => {
                debug!("No homework updates in this cycle");
                CycleOutcome::NoHomeworks
            }
            Some(latest) => {
                let record = HomeworkRecord::from_value(latest)?;
                let message = record.message();

                match self.detection.detect_change(&record) {
                    Some(current) => {
                        deliver(&self.notifier, &self.chat_id, &message);
                        self.detection.record_notified(current);
                        CycleOutcome::Notified { message }
                    }
                    None => {
                        debug!("Status of \"{}\" did not change", record.name);
                        CycleOutcome::Unchanged
                    }
                }
            }
        };

        self.cursor.on_success(cycle_started);
        Ok(outcome)
    }

    /// Run one cycle, log any failure, then sleep for the retry period.
    ///
    /// Nothing escapes: errors and panics inside the cycle are logged and the
    /// cycle counts as failed.
    pub fn tick(&mut self) -> Option<CycleOutcome> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.run_cycle()));

        let outcome = match result {
            Ok(Ok(outcome)) => Some(outcome),
            Ok(Err(e)) => {
                error!("Program failure: {e}");
                None
            }
            Err(payload) => {
                error!("Program failure: {}", panic_message(payload.as_ref()));
                None
            }
        };

        if !self.retry_period.is_zero() {
            std::thread::sleep(self.retry_period);
        }
        outcome
    }

    /// Poll forever. Only external termination stops the loop.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }
}

fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("unexpected panic: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("unexpected panic: {s}")
    } else {
        "unexpected panic".to_string()
    }
}
