//! Twilio Programmable Messaging transport.
//!
//! Sends one form-encoded `POST` to the account's `Messages.json` resource
//! using HTTP basic auth (account SID + auth token).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{SmsError, SmsMessage, SmsTransport};

/// Default Twilio REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.twilio.com";

/// TCP connect timeout. The overall send is bounded by the notifier.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Credentials and endpoint for the Twilio API.
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub api_base: String,
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Delivers messages through the Twilio REST API.
pub struct TwilioTransport {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioTransport {
    pub fn new(config: TwilioConfig) -> Result<Self, SmsError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl SmsTransport for TwilioTransport {
    async fn send(&self, message: &SmsMessage) -> Result<(), SmsError> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("From", message.from.as_str()),
                ("To", message.to.as_str()),
                ("Body", message.body.as_str()),
            ])
            .send()
            .await?;

        classify_status(response.status())
    }

    fn name(&self) -> &'static str {
        "twilio"
    }
}

/// Map a provider response status onto the delivery error taxonomy.
fn classify_status(status: StatusCode) -> Result<(), SmsError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(SmsError::Unauthorized(status.as_u16()))
        }
        StatusCode::TOO_MANY_REQUESTS => Err(SmsError::RateLimited),
        other => Err(SmsError::HttpStatus(other.as_u16())),
    }
}
