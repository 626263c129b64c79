//! Outbound SMS delivery channels.
//!
//! [`SmsTransport`] is the seam between the notifier and the provider. The
//! Twilio transport talks to the real gateway; the log transport is used when
//! no credentials are configured.

pub mod log;
pub mod twilio;

use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for SMS delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    /// The underlying HTTP request failed (network, DNS, TLS, etc.).
    #[error("SMS request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider rejected the credentials.
    #[error("SMS provider rejected credentials (HTTP {0})")]
    Unauthorized(u16),

    /// The provider is throttling this account.
    #[error("SMS provider rate limit exceeded")]
    RateLimited,

    /// The provider returned another non-2xx status code.
    #[error("SMS provider returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Message + transport
// ---------------------------------------------------------------------------

/// A single outbound text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    pub from: String,
    pub to: String,
    pub body: String,
}

/// Sends exactly one message per call. Implementations must not retry.
#[async_trait]
pub trait SmsTransport: Send + Sync {
    async fn send(&self, message: &SmsMessage) -> Result<(), SmsError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether a successful `send` means an SMS actually left the service.
    fn delivers_sms(&self) -> bool {
        true
    }
}
