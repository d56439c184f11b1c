//! Outbound notifications for new contact form submissions.
//!
//! [`ContactNotifier`] renders a submission with [`message::render`] and
//! hands it to a [`NotificationChannel`]. Delivery is best-effort: every
//! failure is logged and reported as `false`, never as an error.

pub mod channel;
pub mod message;
pub mod telegram;

use std::sync::Arc;

use folio_db::models::contact::ContactSubmission;

pub use channel::{DeliveryError, NotificationChannel};
pub use telegram::{TelegramChannel, TelegramConfig};

/// Sends a notification for each persisted contact submission.
#[derive(Clone)]
pub struct ContactNotifier {
    channel: Option<Arc<dyn NotificationChannel>>,
}

impl ContactNotifier {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self {
            channel: Some(channel),
        }
    }

    /// A notifier with no channel; every call is skipped.
    pub fn disabled() -> Self {
        Self { channel: None }
    }

    /// Notify about `submission`. Returns whether the message was delivered.
    pub async fn notify(&self, submission: &ContactSubmission) -> bool {
        let Some(channel) = &self.channel else {
            tracing::warn!(
                submission_id = submission.id,
                "Notification channel not configured, skipping contact notification"
            );
            return false;
        };

        let text = message::render(submission);
        match channel.send(&text).await {
            Ok(()) => {
                tracing::info!(
                    submission_id = submission.id,
                    channel = channel.name(),
                    "Contact notification sent"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    submission_id = submission.id,
                    channel = channel.name(),
                    error = %e,
                    "Contact notification failed"
                );
                false
            }
        }
    }
}

impl std::fmt::Debug for ContactNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactNotifier")
            .field("channel", &self.channel.as_ref().map(|c| c.name()))
            .finish()
    }
}
