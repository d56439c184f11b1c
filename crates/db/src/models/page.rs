//! Standard page model (privacy policy, terms and similar).

use folio_core::catalog::{limit_length, require_text, MAX_PAGE_TITLE_LENGTH};
use folio_core::error::{CoreError, FieldErrors};
use folio_core::localization::{Localized, TranslatableField};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `standard_pages` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StandardPage {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub content: String,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    pub updated_at: Timestamp,
}

impl StandardPage {
    pub const TITLE: TranslatableField<StandardPage> = TranslatableField {
        name: "title",
        base: |p| &p.title,
        ru: |p| p.title_ru.as_deref(),
        en: |p| p.title_en.as_deref(),
    };

    pub const CONTENT: TranslatableField<StandardPage> = TranslatableField {
        name: "content",
        base: |p| &p.content,
        ru: |p| p.content_ru.as_deref(),
        en: |p| p.content_en.as_deref(),
    };
}

impl Localized for StandardPage {
    const FIELDS: &'static [TranslatableField<Self>] = &[Self::TITLE, Self::CONTENT];
}

/// DTO for creating or replacing a page; the slug comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPage {
    pub title: String,
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub content: String,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
}

impl UpsertPage {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", &self.title, "Title");
        require_text(&mut errors, "content", &self.content, "Content");
        for (field, value) in [
            ("title", Some(self.title.as_str())),
            ("title_ru", self.title_ru.as_deref()),
            ("title_en", self.title_en.as_deref()),
        ] {
            if let Some(value) = value {
                limit_length(&mut errors, field, value, MAX_PAGE_TITLE_LENGTH);
            }
        }
        errors.into_result()
    }
}
