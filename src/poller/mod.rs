//! Poll scheduler for homework review status.
//!
//! Alternates between polling the review API and sleeping a fixed retry
//! period. A failed cycle is logged and never stops the loop.

pub mod core;
mod cursor;
mod detection;


pub use self::core::{CycleOutcome, Poller};
pub use cursor::PollCursor;
pub use detection::{Detection, ReportState};
