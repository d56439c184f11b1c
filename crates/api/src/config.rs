//! Server configuration loaded from environment variables.

use std::fmt;
use std::time::Duration;

use axum::http::HeaderValue;
use folio_notify::telegram::{TelegramConfig, DEFAULT_API_BASE};

/// Error raised when the environment holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Deployment profile selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

/// Server configuration.
///
/// All fields have defaults suitable for local development. The
/// `production` profile refuses to fall back to the development CORS origin.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    pub app_env: AppEnv,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Scheme and host used for absolute pagination links. When unset the
    /// request's `Host` header is used.
    pub public_base_url: Option<String>,
    /// Telegram delivery settings; `None` disables contact notifications.
    pub telegram: Option<TelegramConfig>,
    /// Bearer token for the admin routes; `None` disables them.
    pub admin_token: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `APP_ENV`              | `development`              |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_BASE_URL`      | unset                      |
    /// | `TELEGRAM_BOT_TOKEN`   | unset                      |
    /// | `TELEGRAM_CHAT_ID`     | unset                      |
    /// | `TELEGRAM_API_BASE`    | `https://api.telegram.org` |
    /// | `NOTIFY_TIMEOUT_SECS`  | `10`                       |
    /// | `ADMIN_API_TOKEN`      | unset                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let app_env = match var("APP_ENV").as_deref() {
            None | Some("development") => AppEnv::Development,
            Some("production") => AppEnv::Production,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "APP_ENV",
                    value: other.to_string(),
                })
            }
        };

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(var("PORT"), "PORT", 8000u16)?;
        let request_timeout_secs =
            parse_or(var("REQUEST_TIMEOUT_SECS"), "REQUEST_TIMEOUT_SECS", 30u64)?;

        let cors_origins = match var("CORS_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None if app_env == AppEnv::Production => {
                return Err(ConfigError::Missing {
                    var: "CORS_ORIGINS",
                })
            }
            None => vec!["http://localhost:3000".to_string()],
        };

        let public_base_url =
            var("PUBLIC_BASE_URL").map(|url| url.trim_end_matches('/').to_string());

        let notify_timeout = parse_or(var("NOTIFY_TIMEOUT_SECS"), "NOTIFY_TIMEOUT_SECS", 10u64)?;
        let telegram = match (var("TELEGRAM_BOT_TOKEN"), var("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig {
                bot_token,
                chat_id,
                api_base: var("TELEGRAM_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout: Duration::from_secs(notify_timeout),
            }),
            _ => None,
        };

        Ok(Self {
            host,
            port,
            app_env,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            telegram,
            admin_token: var("ADMIN_API_TOKEN"),
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("app_env", &self.app_env)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("public_base_url", &self.public_base_url)
            .field("telegram", &self.telegram)
            .field("admin_token", &self.admin_token.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| match HeaderValue::from_str(origin) {
            Ok(_) => Ok(origin.to_string()),
            Err(_) => Err(ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
            }),
        })
        .collect()
}
