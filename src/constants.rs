/// Homework status endpoint of the Practicum review API.
pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Base URL of the Telegram Bot API.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Environment variable holding the Practicum OAuth token.
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the destination chat id.
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Environment variable overriding the log filter.
pub const LOG_FILTER_VAR: &str = "HOMEWORK_BOT_LOG";

/// Seconds to sleep between poll cycles.
pub const RETRY_PERIOD_SECS: u64 = 600;

/// Roughly one month in seconds, for `--lookback`.
pub const ONE_MONTH_SECS: u64 = 2_629_743;

// HTTP timeouts shared by the API and Telegram clients
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default log file, truncated on every start.
pub const DEFAULT_LOG_FILE: &str = "main.log";
