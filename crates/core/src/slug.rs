//! URL slug normalisation and collision-free slug generation.
//!
//! The store decides whether a slug is taken; this module only knows how to
//! build the base slug and the deterministic `base`, `base-1`, `base-2`, ...
//! candidate sequence.

use crate::error::CoreError;

/// Substituted when the source text yields an empty slug.
pub const PLACEHOLDER_SLUG: &str = "item";

/// Upper bound on candidates tried before giving up.
pub const MAX_SLUG_ATTEMPTS: usize = 10_000;

/// Maximum length of the base slug, leaving room for a `-NNNN` suffix
/// within the 220-character column.
pub const MAX_BASE_SLUG_LENGTH: usize = 200;

/// Maximum length of any stored slug.
pub const MAX_SLUG_LENGTH: usize = 220;

/// Normalise free text into a URL-safe slug.
///
/// ASCII letters are lowercased and digits kept; runs of other ASCII
/// characters become a single `-`; non-ASCII characters are dropped.
/// Leading and trailing separators are trimmed. May return an empty string.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_ascii() {
            pending_separator = true;
        }
    }

    slug
}

/// Slug used as the root of the candidate sequence.
///
/// Falls back to [`PLACEHOLDER_SLUG`] when the text has no usable
/// characters, and truncates to [`MAX_BASE_SLUG_LENGTH`].
pub fn base_slug(text: &str) -> String {
    let mut slug = slugify(text);
    if slug.len() > MAX_BASE_SLUG_LENGTH {
        slug.truncate(MAX_BASE_SLUG_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    if slug.is_empty() {
        PLACEHOLDER_SLUG.to_string()
    } else {
        slug
    }
}

/// Whether `slug` is already in normalised form (non-empty, lowercase
/// alphanumerics separated by single hyphens, at most [`MAX_SLUG_LENGTH`]).
///
/// Used for externally assigned slugs, which are never rewritten.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.len() <= MAX_SLUG_LENGTH && slugify(slug) == slug
}

/// Normalise a slug supplied by the caller.
///
/// Supplied slugs are slugified and truncated but never suffixed; a value
/// with no usable characters is a validation error.
pub fn normalize_slug(slug: &str) -> Result<String, CoreError> {
    let mut normalized = slugify(slug);
    if normalized.len() > MAX_SLUG_LENGTH {
        normalized.truncate(MAX_SLUG_LENGTH);
        while normalized.ends_with('-') {
            normalized.pop();
        }
    }
    if normalized.is_empty() {
        return Err(CoreError::invalid(
            "slug",
            "Enter a valid slug consisting of letters, numbers or hyphens.",
        ));
    }
    Ok(normalized)
}

/// Deterministic sequence of slug candidates: `base`, `base-1`, `base-2`, ...
///
/// Yields at most [`MAX_SLUG_ATTEMPTS`] items.
#[derive(Debug, Clone)]
pub struct SlugCandidates {
    base: String,
    attempt: usize,
}

impl SlugCandidates {
    /// Start a sequence from free text (normalised via [`base_slug`]).
    pub fn from_text(text: &str) -> Self {
        Self::from_base(base_slug(text))
    }

    /// Start a sequence from an already-normalised base slug.
    pub fn from_base(base: String) -> Self {
        Self { base, attempt: 0 }
    }

    /// Error to report once the sequence is used up.
    pub fn exhausted(&self) -> CoreError {
        CoreError::SlugExhausted {
            base: self.base.clone(),
        }
    }
}

impl Iterator for SlugCandidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.attempt >= MAX_SLUG_ATTEMPTS {
            return None;
        }
        let candidate = match self.attempt {
            0 => self.base.clone(),
            n => format!("{}-{n}", self.base),
        };
        self.attempt += 1;
        Some(candidate)
    }
}

/// Pick the first free slug for `text`.
///
/// `is_taken` answers whether a candidate already belongs to another
/// record; excluding the record being updated is the checker's job.
pub fn generate_unique_slug<F>(text: &str, mut is_taken: F) -> Result<String, CoreError>
where
    F: FnMut(&str) -> bool,
{
    let mut candidates = SlugCandidates::from_text(text);
    for candidate in candidates.by_ref() {
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }
    Err(candidates.exhausted())
}
