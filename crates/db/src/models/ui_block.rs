//! UI text block model.

use folio_core::catalog::{
    limit_length, require_text, MAX_BLOCK_DESCRIPTION_LENGTH, MAX_BLOCK_KEY_LENGTH,
};
use folio_core::error::{CoreError, FieldErrors};
use folio_core::localization::{Localized, TranslatableField};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ui_blocks` table, addressed by `(section, key)`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UiBlock {
    pub id: DbId,
    pub section: String,
    pub key: String,
    pub description: String,
    pub content: String,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
    pub updated_at: Timestamp,
}

impl UiBlock {
    pub const CONTENT: TranslatableField<UiBlock> = TranslatableField {
        name: "content",
        base: |b| &b.content,
        ru: |b| b.content_ru.as_deref(),
        en: |b| b.content_en.as_deref(),
    };
}

impl Localized for UiBlock {
    const FIELDS: &'static [TranslatableField<Self>] = &[Self::CONTENT];
}

/// DTO for creating or replacing a block; section and key come from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertUiBlock {
    #[serde(default)]
    pub description: String,
    pub content: String,
    pub content_ru: Option<String>,
    pub content_en: Option<String>,
}

impl UpsertUiBlock {
    /// Validate the payload together with the block key it will be stored under.
    pub fn validate(&self, key: &str) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "key", key, "Key");
        limit_length(&mut errors, "key", key, MAX_BLOCK_KEY_LENGTH);
        limit_length(
            &mut errors,
            "description",
            &self.description,
            MAX_BLOCK_DESCRIPTION_LENGTH,
        );
        require_text(&mut errors, "content", &self.content, "Content");
        errors.into_result()
    }
}

