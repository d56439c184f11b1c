use std::sync::Arc;

use folio_notify::{ContactNotifier, TelegramChannel};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and notifier are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Delivers contact form notifications.
    pub notifier: ContactNotifier,
}

impl AppState {
    pub fn new(pool: folio_db::DbPool, config: ServerConfig) -> Self {
        let notifier = build_notifier(&config);
        Self {
            pool,
            config: Arc::new(config),
            notifier,
        }
    }
}

/// Build the contact notifier from configuration.
///
/// A missing or unusable Telegram configuration yields a disabled notifier
/// rather than a startup failure.
pub fn build_notifier(config: &ServerConfig) -> ContactNotifier {
    let Some(telegram) = &config.telegram else {
        tracing::warn!(
            "Telegram bot token or chat id not configured, contact notifications disabled"
        );
        return ContactNotifier::disabled();
    };

    match TelegramChannel::new(telegram.clone()) {
        Ok(channel) => ContactNotifier::new(Arc::new(channel)),
        Err(e) => {
            tracing::error!(
                error = %e,
                "Failed to build Telegram client, contact notifications disabled"
            );
            ContactNotifier::disabled()
        }
    }
}
