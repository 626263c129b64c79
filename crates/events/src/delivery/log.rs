//! Fallback transport that writes alerts to the log instead of sending SMS.

use async_trait::async_trait;

use super::{SmsError, SmsMessage, SmsTransport};

/// Used when no SMS provider credentials are configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransport;

#[async_trait]
impl SmsTransport for LogTransport {
    async fn send(&self, message: &SmsMessage) -> Result<(), SmsError> {
        tracing::warn!(
            from = %message.from,
            to = %message.to,
            body = %message.body,
            "SMS provider not configured, alert written to log only"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }

    fn delivers_sms(&self) -> bool {
        false
    }
}
