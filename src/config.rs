//! Startup configuration and the credential gate.
//!
//! All settings are resolved once into an immutable [`Settings`] value that is
//! passed by reference to every component. Nothing reads the environment after
//! [`Settings::from_env`] returns.

use std::path::Path;
use std::time::Duration;

use tracing::error;

use crate::constants::{
    HTTP_CONNECT_TIMEOUT_SECS, HTTP_REQUEST_TIMEOUT_SECS, PRACTICUM_ENDPOINT, PRACTICUM_TOKEN_VAR,
    RETRY_PERIOD_SECS, TELEGRAM_API_URL, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR,
};
use crate::error::ConfigError;

/// How the poll cursor moves between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPolicy {
    /// Every cycle queries from the process start timestamp.
    #[default]
    Fixed,
    /// After a successful cycle the cursor moves to that cycle's fetch time.
    Advance,
}

/// The three identifiers the notifier cannot run without.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Immutable runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub endpoint: String,
    pub telegram_api_url: String,
    pub retry_period: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub cursor_policy: CursorPolicy,
    /// Seconds subtracted from the start time to form the first cursor.
    pub lookback_secs: u64,
}

impl Settings {
    /// Settings with defaults for everything but the credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: TELEGRAM_API_URL.to_string(),
            retry_period: Duration::from_secs(RETRY_PERIOD_SECS),
            connect_timeout: Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS),
            cursor_policy: CursorPolicy::Fixed,
            lookback_secs: 0,
        }
    }

    /// Read credentials from the process environment and run the gate.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = check_tokens(|name| std::env::var(name).ok())?;
        Ok(Self::new(credentials))
    }
}

/// Load a `.env` style file into the process environment.
///
/// With no explicit path a `.env` in the working directory is loaded if it
/// exists; its absence is not an error. An explicit path must load.
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(path) => dotenvy::from_path(path)
            .map(|_| ())
            .map_err(|source| ConfigError::EnvFile {
                path: path.display().to_string(),
                source,
            }),
        None => {
            dotenvy::dotenv().ok();
            Ok(())
        }
    }
}

/// Verify that every required identifier is present and non-empty.
///
/// Each missing name is logged at critical severity before the error is
/// returned, so a caller only has to stop the process.
pub fn check_tokens<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let practicum_token = read(PRACTICUM_TOKEN_VAR);
    let telegram_token = read(TELEGRAM_TOKEN_VAR);
    let chat_id = read(TELEGRAM_CHAT_ID_VAR);

    let mut missing = Vec::new();
    for (name, value) in [
        (PRACTICUM_TOKEN_VAR, &practicum_token),
        (TELEGRAM_TOKEN_VAR, &telegram_token),
        (TELEGRAM_CHAT_ID_VAR, &chat_id),
    ] {
        if value.is_none() {
            error!(
                critical = true,
                "Required environment variable is missing: {name}! The program is forcibly stopped."
            );
            missing.push(name);
        }
    }

    match (practicum_token, telegram_token, chat_id) {
        (Some(practicum_token), Some(telegram_token), Some(chat_id)) => Ok(Credentials {
            practicum_token,
            telegram_token,
            chat_id,
        }),
        _ => Err(ConfigError::MissingVariables(missing)),
    }
}
