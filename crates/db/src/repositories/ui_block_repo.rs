//! Repository for the `ui_blocks` table.

use folio_core::catalog::BlockSection;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::ui_block::{UiBlock, UpsertUiBlock};

/// Column list for ui_blocks queries.
const COLUMNS: &str = "id, section, key, description, content, content_ru, content_en, updated_at";

/// Provides lookups and upserts for UI text blocks.
pub struct UiBlockRepo;

impl UiBlockRepo {
    /// List blocks, optionally restricted to one section, ordered by
    /// `(section, key)`.
    pub async fn list(
        pool: &PgPool,
        section: Option<BlockSection>,
    ) -> Result<Vec<UiBlock>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ui_blocks
             WHERE ($1::TEXT IS NULL OR section = $1)
             ORDER BY section ASC, key ASC"
        );
        sqlx::query_as::<_, UiBlock>(&query)
            .bind(section.map(|s| s.as_str()))
            .fetch_all(pool)
            .await
    }

    /// Find a block by its `(section, key)` address.
    pub async fn find(
        pool: &PgPool,
        section: BlockSection,
        key: &str,
    ) -> Result<Option<UiBlock>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ui_blocks WHERE section = $1 AND key = $2");
        sqlx::query_as::<_, UiBlock>(&query)
            .bind(section.as_str())
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Create the block at `(section, key)`, or replace its content.
    pub async fn upsert(
        pool: &PgPool,
        section: BlockSection,
        key: &str,
        input: &UpsertUiBlock,
    ) -> Result<UiBlock, StoreError> {
        input.validate(key)?;

        let query = format!(
            "INSERT INTO ui_blocks (section, key, description, content, content_ru, content_en)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT ON CONSTRAINT uq_ui_blocks_section_key DO UPDATE SET
                description = EXCLUDED.description,
                content = EXCLUDED.content,
                content_ru = EXCLUDED.content_ru,
                content_en = EXCLUDED.content_en,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        let block = sqlx::query_as::<_, UiBlock>(&query)
            .bind(section.as_str())
            .bind(key)
            .bind(&input.description)
            .bind(&input.content)
            .bind(&input.content_ru)
            .bind(&input.content_en)
            .fetch_one(pool)
            .await?;
        Ok(block)
    }
}
