//! Review API access: fetching raw state and checking its shape.

pub(crate) mod client;
mod response;

use serde_json::Value;

use crate::error::TransportError;

pub use client::PracticumClient;
pub use response::check_response;

/// Source of raw homework state.
///
/// `from_date` is the poll cursor in seconds since the Unix epoch. The
/// returned document is decoded JSON and has not been shape-checked.
pub trait StatusSource {
    fn fetch(&self, from_date: i64) -> Result<Value, TransportError>;
}
