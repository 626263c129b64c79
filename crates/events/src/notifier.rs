//! Single-shot alert notifier with a bounded send timeout.
//!
//! [`Notifier`] turns a [`LeakAlert`] into one [`SmsMessage`] using the
//! configured sender, recipient and body, and hands it to the transport.
//! There is no retry: one call in, at most one message out.

use std::sync::Arc;
use std::time::Duration;

use gaswatch_core::alert::LeakAlert;

use crate::delivery::{SmsError, SmsMessage, SmsTransport};

/// Default message prefix when `ALERT_BODY` is not set.
pub const DEFAULT_ALERT_BODY: &str = "Gas leak detected!";

/// Default upper bound for a single send.
pub const DEFAULT_ALERT_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for a failed notification attempt.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The transport reported a failure.
    #[error(transparent)]
    Transport(#[from] SmsError),

    /// The transport did not finish within the configured timeout.
    #[error("SMS send timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u128 },
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Routing and content of outbound alerts.
#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Sender identity (phone number or messaging service id).
    pub from: String,
    /// Recipient phone number.
    pub to: String,
    /// Message prefix; the leak signal and reading id are appended.
    pub body: String,
    /// Upper bound on a single transport call.
    pub timeout: Duration,
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Sends leak alerts through an [`SmsTransport`].
#[derive(Clone)]
pub struct Notifier {
    transport: Arc<dyn SmsTransport>,
    config: AlertConfig,
}

impl Notifier {
    pub fn new(transport: Arc<dyn SmsTransport>, config: AlertConfig) -> Self {
        Self { transport, config }
    }

    /// Name of the underlying transport, for logs.
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// `false` when alerts are only written to the log.
    pub fn delivers_sms(&self) -> bool {
        self.transport.delivers_sms()
    }

    /// Send one message with an explicit body, sender and recipient.
    pub async fn alert(&self, body: &str, from: &str, to: &str) -> Result<(), NotifyError> {
        let message = SmsMessage {
            from: from.to_string(),
            to: to.to_string(),
            body: body.to_string(),
        };

        match tokio::time::timeout(self.config.timeout, self.transport.send(&message)).await {
            Ok(result) => result.map_err(NotifyError::from),
            Err(_) => Err(NotifyError::Timeout {
                timeout_ms: self.config.timeout.as_millis(),
            }),
        }
    }

    /// Send the alert for a detected leak using the configured routing.
    pub async fn notify_leak(&self, alert: &LeakAlert) -> Result<(), NotifyError> {
        let body = alert.message(&self.config.body);
        self.alert(&body, &self.config.from, &self.config.to).await
    }
}
