//! Bearer-token guard for the admin routes.
//!
//! The presented token and the configured `ADMIN_API_TOKEN` are both
//! SHA-256 hashed and the digests compared in constant time, so neither
//! the token length nor a matching prefix leaks through timing.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Requires a valid admin bearer token. Rejects with 401 otherwise, and
/// always when no admin token is configured.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            return Err(unauthorized("Admin API is disabled"));
        };

        let provided = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or_else(|| unauthorized("Missing bearer token"))?;

        if !tokens_match(provided, expected) {
            tracing::warn!("Rejected admin request with invalid token");
            return Err(unauthorized("Invalid bearer token"));
        }
        Ok(RequireAdmin)
    }
}

/// Compare two tokens by SHA-256 digest in constant time.
pub fn tokens_match(provided: &str, expected: &str) -> bool {
    let provided = Sha256::digest(provided.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    provided.ct_eq(&expected).into()
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_tokens_match() {
        assert!(tokens_match("s3cret-token", "s3cret-token"));
    }

    #[test]
    fn different_tokens_do_not_match() {
        assert!(!tokens_match("s3cret-token", "s3cret-tokem"));
        assert!(!tokens_match("short", "s3cret-token"));
        assert!(!tokens_match("", "s3cret-token"));
    }
}
