//! Homework records, review statuses and their chat messages.

mod record;
mod status;

pub use record::{parse_status, HomeworkRecord};
pub use status::{HomeworkStatus, VERDICTS};
