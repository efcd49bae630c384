use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use homework_bot::api::PracticumClient;
use homework_bot::config::{load_env_file, CursorPolicy, Settings};
use homework_bot::constants::{DEFAULT_LOG_FILE, RETRY_PERIOD_SECS};
use homework_bot::logging::{self, LogSettings};
use homework_bot::notifier::TelegramNotifier;
use homework_bot::poller::Poller;
use tracing::info;

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Forward homework review status changes to Telegram", long_about = None)]
#[command(version)]
struct Cli {
    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,

    /// Seconds to wait between poll cycles
    #[arg(long, value_name = "SECS", default_value_t = RETRY_PERIOD_SECS)]
    retry_period: u64,

    /// Start the query window this many seconds before now
    #[arg(long, value_name = "SECS", default_value_t = 0)]
    lookback: u64,

    /// Move the query window forward after every successful cycle
    #[arg(long)]
    advance_cursor: bool,

    /// Log file (truncated on start)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Load environment variables from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Override the review API endpoint
    #[arg(long, hide = true)]
    endpoint: Option<String>,

    /// Override the Telegram Bot API base URL
    #[arg(long, hide = true)]
    telegram_api: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    load_env_file(cli.env_file.as_deref())?;
    logging::init(&LogSettings {
        file: cli.log_file.clone(),
        ..Default::default()
    })?;

    let mut settings = Settings::from_env()
        .context("Telegram bot is not running: mandatory environment variables are missing")?;
    settings.retry_period = if cli.once {
        Duration::ZERO
    } else {
        Duration::from_secs(cli.retry_period)
    };
    settings.lookback_secs = cli.lookback;
    if cli.advance_cursor {
        settings.cursor_policy = CursorPolicy::Advance;
    }
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(api) = cli.telegram_api {
        settings.telegram_api_url = api;
    }

    let source = PracticumClient::new(&settings).context("Failed to create review API client")?;
    let notifier = TelegramNotifier::new(&settings).context("Failed to create Telegram client")?;
    let mut poller = Poller::new(&settings, source, notifier);

    info!(
        "Polling {} every {}s from_date={}",
        settings.endpoint,
        settings.retry_period.as_secs(),
        poller.cursor().from_date()
    );

    if cli.once {
        poller.tick();
        return Ok(());
    }

    poller.run()
}
