//! Shared query parameter types and pagination link building.

use axum::http::header::HOST;
use axum::http::HeaderMap;
use folio_core::localization::Language;
use serde::Deserialize;

/// `?lang=` parameter accepted by every content endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}

impl LangParams {
    /// Language for projects, services and pages (unknown values use the default).
    pub fn language(&self) -> Language {
        Language::from_query(self.lang.as_deref())
    }
}

/// Query parameters for `GET /api/projects/`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub lang: Option<String>,
}

/// Query parameters for `GET /api/services/`.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceListParams {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub lang: Option<String>,
}

/// Query parameters for `GET /api/blocks/`.
#[derive(Debug, Default, Deserialize)]
pub struct BlockListParams {
    pub section: Option<String>,
    pub lang: Option<String>,
}

/// `?status=&limit=&offset=` for the admin contact listing.
#[derive(Debug, Default, Deserialize)]
pub struct ContactListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Only the literal `true` enables a boolean filter flag.
pub fn flag_enabled(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Treat an empty filter value (`?category=`) as absent.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Scheme and authority for absolute links.
///
/// Uses the configured public base URL when set, otherwise the request's
/// `Host` header (and `X-Forwarded-Proto`, defaulting to `http`).
pub fn request_base_url(public_base_url: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = public_base_url {
        return base.to_string();
    }
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    format!("{scheme}://{host}")
}

/// Absolute URL for `page`, preserving every other query parameter.
///
/// Existing `page` parameters are dropped and the new one appended; the
/// remaining pairs are kept verbatim (still percent-encoded).
pub fn page_link(base_url: &str, path: &str, raw_query: Option<&str>, page: i64) -> String {
    let mut pairs: Vec<&str> = raw_query
        .unwrap_or("")
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some("page"))
        .collect();
    let page_pair = format!("page={page}");
    pairs.push(&page_pair);
    format!("{base_url}{path}?{}", pairs.join("&"))
}
