//! Repository for the `standard_pages` table.

use folio_core::error::CoreError;
use folio_core::slug::is_valid_slug;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::page::{StandardPage, UpsertPage};

/// Column list for standard_pages queries.
const COLUMNS: &str = "id, slug, title, title_ru, title_en, \
    content, content_ru, content_en, updated_at";

/// Provides lookups and upserts for standard pages.
pub struct PageRepo;

impl PageRepo {
    /// Find a page by its slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<StandardPage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM standard_pages WHERE slug = $1");
        sqlx::query_as::<_, StandardPage>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Create the page at `slug`, or replace its content if it exists.
    ///
    /// Page slugs are assigned by the caller and must already be in
    /// normalised form; they are never rewritten.
    pub async fn upsert(
        pool: &PgPool,
        slug: &str,
        input: &UpsertPage,
    ) -> Result<StandardPage, StoreError> {
        if !is_valid_slug(slug) {
            return Err(CoreError::invalid(
                "slug",
                "Enter a valid slug consisting of lowercase letters, numbers or hyphens.",
            )
            .into());
        }
        input.validate()?;

        let query = format!(
            "INSERT INTO standard_pages
                (slug, title, title_ru, title_en, content, content_ru, content_en)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT ON CONSTRAINT uq_standard_pages_slug DO UPDATE SET
                title = EXCLUDED.title,
                title_ru = EXCLUDED.title_ru,
                title_en = EXCLUDED.title_en,
                content = EXCLUDED.content,
                content_ru = EXCLUDED.content_ru,
                content_en = EXCLUDED.content_en,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        let page = sqlx::query_as::<_, StandardPage>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.content)
            .bind(&input.content_ru)
            .bind(&input.content_en)
            .fetch_one(pool)
            .await?;
        Ok(page)
    }
}
