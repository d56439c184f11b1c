//! Repository for the `services` table.

use folio_core::slug::normalize_slug;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::service::{CreateService, Service, ServiceFilter, UpdateService};
use crate::slug::{write_with_unique_slug, SlugTable};

/// Column list for services queries. `price` is read back as decimal text.
const COLUMNS: &str = "id, slug, name, name_ru, name_en, \
    description, description_ru, description_en, category, \
    price::TEXT AS price, is_featured, sort_order, created_date, updated_date";

/// Provides CRUD operations for service offerings.
pub struct ServiceRepo;

impl ServiceRepo {
    /// List all services matching `filter`, ordered by `sort_order` then
    /// newest first.
    pub async fn list(pool: &PgPool, filter: &ServiceFilter) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services
             WHERE ($1::TEXT IS NULL OR category = $1) AND (NOT $2 OR is_featured)
             ORDER BY sort_order ASC, created_date DESC, id DESC"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(filter.category.map(|c| c.as_str()))
            .bind(filter.featured)
            .fetch_all(pool)
            .await
    }

    /// Find a service by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a service, generating a unique slug from the name unless one
    /// is supplied.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, StoreError> {
        input.validate()?;
        let explicit = input
            .slug
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(normalize_slug)
            .transpose()?;

        let service = write_with_unique_slug(
            pool,
            SlugTable::Services,
            &input.name,
            explicit,
            None,
            move |slug| Self::insert(pool, input, slug),
        )
        .await?;
        tracing::info!(service_id = service.id, slug = %service.slug, "Service created");
        Ok(service)
    }

    /// Update a service. Returns `None` if it does not exist.
    ///
    /// Slug handling matches [`ProjectRepo::update`](super::ProjectRepo::update).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, StoreError> {
        input.validate()?;
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let explicit = match input.slug.as_deref().map(str::trim) {
            None => return Ok(Self::apply_update(pool, id, input, None).await?),
            Some("") => None,
            Some(slug) => Some(normalize_slug(slug)?),
        };
        let name = input.name.as_deref().unwrap_or(&current.name);

        write_with_unique_slug(
            pool,
            SlugTable::Services,
            name,
            explicit,
            Some(id),
            move |slug| Self::apply_update(pool, id, input, Some(slug)),
        )
        .await
    }

    async fn insert(
        pool: &PgPool,
        input: &CreateService,
        slug: String,
    ) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services
                (name, name_ru, name_en, description, description_ru, description_en,
                 category, slug, price, is_featured, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::NUMERIC, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(input.name.trim())
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.description)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(input.category.as_str())
            .bind(slug)
            .bind(&input.price)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    async fn apply_update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
        slug: Option<String>,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                name = COALESCE($2, name),
                name_ru = COALESCE($3, name_ru),
                name_en = COALESCE($4, name_en),
                description = COALESCE($5, description),
                description_ru = COALESCE($6, description_ru),
                description_en = COALESCE($7, description_en),
                category = COALESCE($8, category),
                slug = COALESCE($9, slug),
                price = COALESCE($10::NUMERIC, price),
                is_featured = COALESCE($11, is_featured),
                sort_order = COALESCE($12, sort_order),
                updated_date = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.description)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(input.category.map(|c| c.as_str()))
            .bind(slug)
            .bind(&input.price)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }
}
