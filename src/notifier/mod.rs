//! Chat delivery for status messages.
//!
//! Delivery is at-most-once and best-effort: [`deliver`] makes a single
//! attempt, logs a failure, and never reports it to the caller.

mod telegram;

use tracing::{debug, error};

use crate::error::DeliveryError;

pub use telegram::TelegramNotifier;

/// Something that can send a text message to a chat.
pub trait Notifier {
    fn send(&self, chat_id: &str, text: &str) -> Result<(), DeliveryError>;
}

/// Send `text` to `chat_id`, logging and discarding any failure.
pub fn deliver<N: Notifier + ?Sized>(notifier: &N, chat_id: &str, text: &str) {
    match notifier.send(chat_id, text) {
        Ok(()) => debug!("Message was sent successfully"),
        Err(e) => error!("Message was not sent: {e}"),
    }
}
