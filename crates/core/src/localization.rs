//! Bilingual field resolution.
//!
//! Translatable records store a base value plus optional `_ru` / `_en`
//! variants. Each entity declares a [`TranslatableField`] per field pair
//! (its accessor table); resolution picks the requested variant when it is
//! non-empty and falls back to the base value otherwise, never to the other
//! language.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Parse an exact language code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Language for a `lang` query value on projects, services and pages.
    ///
    /// Absent or unrecognised values use the default language.
    pub fn from_query(lang: Option<&str>) -> Self {
        lang.and_then(Self::from_code).unwrap_or_default()
    }

    /// Language for a `lang` query value on UI blocks.
    ///
    /// Only an explicit, recognised value selects a variant; otherwise the
    /// base content is served.
    pub fn explicit(lang: Option<&str>) -> Option<Self> {
        lang.and_then(Self::from_code)
    }
}

/// Accessors for one translatable field of record type `R`.
pub struct TranslatableField<R> {
    /// Output field name.
    pub name: &'static str,
    pub base: fn(&R) -> &str,
    pub ru: fn(&R) -> Option<&str>,
    pub en: fn(&R) -> Option<&str>,
}

impl<R> TranslatableField<R> {
    /// Stored variant for `lang`, if any (may be empty).
    pub fn variant<'r>(&self, record: &'r R, lang: Language) -> Option<&'r str> {
        match lang {
            Language::Ru => (self.ru)(record),
            Language::En => (self.en)(record),
        }
    }

    /// Resolved value for `lang`: the variant if non-empty, else the base.
    pub fn resolve<'r>(&self, record: &'r R, lang: Language) -> &'r str {
        non_empty(self.variant(record, lang)).unwrap_or_else(|| (self.base)(record))
    }

    /// Like [`resolve`](Self::resolve), but `None` means "no language
    /// requested" and yields the base value unconditionally.
    pub fn resolve_explicit<'r>(&self, record: &'r R, lang: Option<Language>) -> &'r str {
        match lang {
            Some(lang) => self.resolve(record, lang),
            None => (self.base)(record),
        }
    }
}

/// Records exposing a fixed table of translatable fields.
pub trait Localized: Sized + 'static {
    const FIELDS: &'static [TranslatableField<Self>];

    /// `(field name, resolved value)` for every translatable field.
    fn localized(&self, lang: Language) -> Vec<(&'static str, &str)> {
        Self::FIELDS
            .iter()
            .map(|field| (field.name, field.resolve(self, lang)))
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
