//! Log output: standard output mirrored to a log file truncated on start.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::constants::{DEFAULT_LOG_FILE, LOG_FILTER_VAR};

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub file: PathBuf,
    /// Filter used when `HOMEWORK_BOT_LOG` is unset.
    pub default_filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            default_filter: "debug".to_string(),
        }
    }
}

/// Build the subscriber without installing it.
pub fn subscriber(settings: &LogSettings) -> Result<impl tracing::Subscriber + Send + Sync> {
    let file = open_log_file(&settings.file)?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&settings.default_filter));

    Ok(Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file))))
}

/// Install the process-wide subscriber.
pub fn init(settings: &LogSettings) -> Result<()> {
    subscriber(settings)?
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create log file: {}", path.display()))
}

/// Run `f` under a debug-level subscriber and return what it wrote to the log file.
#[cfg(test)]
pub(crate) fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let dir = tempfile::TempDir::new().unwrap();
    let settings = LogSettings {
        file: dir.path().join("capture.log"),
        default_filter: "debug".to_string(),
    };
    let value = tracing::subscriber::with_default(subscriber(&settings).unwrap(), f);
    (value, std::fs::read_to_string(&settings.file).unwrap())
}
