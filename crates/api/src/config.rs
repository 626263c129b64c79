use std::time::Duration;

use axum::http::HeaderValue;
use gaswatch_events::delivery::twilio::DEFAULT_API_BASE;
use gaswatch_events::dispatcher::DEFAULT_QUEUE_CAPACITY;
use gaswatch_events::notifier::{DEFAULT_ALERT_BODY, DEFAULT_ALERT_TIMEOUT};
use gaswatch_events::{AlertConfig, TwilioConfig};

/// Placeholder sender/recipient used with the log-only transport.
const UNCONFIGURED_NUMBER: &str = "unconfigured";

/// Error raised while loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the SMS credentials have defaults suitable for local
/// development. Without `TWILIO_ACCOUNT_SID` alerts go to the log only.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL.
    pub database_url: String,
    /// Connection pool size (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for queued alerts to drain (default: `10`).
    pub shutdown_timeout_secs: u64,
    /// Sender, recipient, body and timeout for leak alerts.
    pub alert: AlertConfig,
    /// Maximum number of alerts waiting for delivery (default: `256`).
    pub alert_queue_capacity: usize,
    /// Twilio credentials; `None` selects the log-only transport.
    pub twilio: Option<TwilioConfig>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                          |
    /// |-------------------------|----------------------------------|
    /// | `HOST`                  | `0.0.0.0`                        |
    /// | `PORT`                  | `3000`                           |
    /// | `DATABASE_URL`          | `sqlite://gas_app.db?mode=rwc`   |
    /// | `DB_MAX_CONNECTIONS`    | `5`                              |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                             |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `10`                             |
    /// | `ALERT_FROM`            | required with Twilio             |
    /// | `ALERT_TO`              | required with Twilio             |
    /// | `ALERT_BODY`            | `Gas leak detected!`             |
    /// | `ALERT_TIMEOUT_SECS`    | `10`                             |
    /// | `ALERT_QUEUE_CAPACITY`  | `256`                            |
    /// | `TWILIO_ACCOUNT_SID`    | unset (log-only alerts)          |
    /// | `TWILIO_AUTH_TOKEN`     | required with `TWILIO_ACCOUNT_SID` |
    /// | `TWILIO_API_BASE`       | `https://api.twilio.com`         |
    /// | `LOG_FORMAT`            | `text` (`json` also accepted)    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let cors_origins = get("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let twilio = match (lookup("TWILIO_ACCOUNT_SID"), lookup("TWILIO_AUTH_TOKEN")) {
            (Some(account_sid), Some(auth_token)) => Some(TwilioConfig {
                account_sid,
                auth_token,
                api_base: get("TWILIO_API_BASE", DEFAULT_API_BASE),
            }),
            (Some(_), None) => return Err(ConfigError::Missing("TWILIO_AUTH_TOKEN")),
            (None, Some(_)) => return Err(ConfigError::Missing("TWILIO_ACCOUNT_SID")),
            (None, None) => None,
        };

        let number = |key: &'static str| match lookup(key) {
            Some(value) => Ok(value),
            None if twilio.is_some() => Err(ConfigError::Missing(key)),
            None => Ok(UNCONFIGURED_NUMBER.to_string()),
        };

        let alert = AlertConfig {
            from: number("ALERT_FROM")?,
            to: number("ALERT_TO")?,
            body: get("ALERT_BODY", DEFAULT_ALERT_BODY),
            timeout: Duration::from_secs(parse_var(
                &lookup,
                "ALERT_TIMEOUT_SECS",
                DEFAULT_ALERT_TIMEOUT.as_secs(),
            )?),
        };

        let log_format = match get("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected 'text' or 'json'".to_string(),
                })
            }
        };

        Ok(Self {
            host: get("HOST", "0.0.0.0"),
            port: parse_var(&lookup, "PORT", 3000)?,
            database_url: get("DATABASE_URL", "sqlite://gas_app.db?mode=rwc"),
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            cors_origins,
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            shutdown_timeout_secs: parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS", 10)?,
            alert,
            alert_queue_capacity: parse_var(
                &lookup,
                "ALERT_QUEUE_CAPACITY",
                DEFAULT_QUEUE_CAPACITY,
            )?,
            twilio,
            log_format,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
