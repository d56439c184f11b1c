//! Notification channel abstraction.

use async_trait::async_trait;

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The remote API returned a non-2xx status code.
    #[error("Notification API returned HTTP {0}")]
    HttpStatus(u16),
}

// The request URL embeds the bot token, so it is stripped before the error
// can reach a log line.
impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        DeliveryError::Request(err.without_url())
    }
}

/// A destination that accepts rendered notification text.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Short channel name for logs.
    fn name(&self) -> &'static str;

    /// Deliver one message.
    async fn send(&self, text: &str) -> Result<(), DeliveryError>;
}
