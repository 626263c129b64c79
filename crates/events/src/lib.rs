//! Gaswatch alert notification.
//!
//! - [`delivery`] — the [`SmsTransport`] seam with Twilio and log-only
//!   implementations.
//! - [`Notifier`] — sends one message per leak alert, bounded by a timeout.
//! - [`AlertDispatcher`] — queues alerts off the request path and records
//!   delivery outcomes in [`AlertStatsSnapshot`] counters.

pub mod delivery;
pub mod dispatcher;
pub mod notifier;

pub use delivery::log::LogTransport;
pub use delivery::twilio::{TwilioConfig, TwilioTransport};
pub use delivery::{SmsError, SmsMessage, SmsTransport};
pub use dispatcher::{AlertDispatcher, AlertStatsSnapshot};
pub use notifier::{AlertConfig, Notifier, NotifyError};
