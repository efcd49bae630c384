//! Error taxonomy for the notifier.
//!
//! `ConfigError` is fatal and only raised before the poll loop starts. Every
//! other error is scoped to a single cycle: it travels up to the scheduler as
//! a [`CycleError`], gets logged there, and the loop carries on.
//! [`DeliveryError`] never leaves the notifier boundary.

use thiserror::Error;

/// Missing or unusable startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variables are missing: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Failure talking to the review API.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to review API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("review API returned HTTP {status} ({reason}) for {endpoint}")]
    Status {
        status: u16,
        reason: String,
        endpoint: String,
    },

    #[error("review API response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid review API endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// A payload did not have the shape the review API documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{what} is not {expected} (got {found})")]
    WrongType {
        what: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("key \"{key}\" is missing from {what}")]
    MissingKey {
        key: &'static str,
        what: &'static str,
    },

    #[error("key \"{key}\" is null in {what}")]
    NullValue {
        key: &'static str,
        what: &'static str,
    },
}

/// The homework status is not one the verdict table knows about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown homework status: \"{status}\"")]
pub struct UnknownStatusError {
    pub status: String,
}

/// Failure turning a homework record into a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),
}

/// Failure delivering a chat message. Swallowed by [`crate::notifier::deliver`].
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("telegram request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("telegram returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("telegram rejected the message: {description}")]
    Rejected { description: String },
}

/// Anything that can abort one poll cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),
}

impl From<TranslateError> for CycleError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::Shape(e) => CycleError::Shape(e),
            TranslateError::UnknownStatus(e) => CycleError::UnknownStatus(e),
        }
    }
}

/// Human-readable JSON type name for shape diagnostics.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "a mapping",
    }
}
