//! Repository for the `projects` table.

use folio_core::slug::normalize_slug;
use folio_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use crate::slug::{write_with_unique_slug, SlugTable};

/// Column list for projects queries.
const COLUMNS: &str = "id, slug, title, title_ru, title_en, \
    description, description_ru, description_en, category, tags, \
    featured_image, demo_url, github_url, is_featured, sort_order, \
    created_date, updated_date";

/// WHERE clause shared by `list` and `count`; binds `$1` category, `$2` featured.
const FILTER: &str = "($1::TEXT IS NULL OR category = $1) AND (NOT $2 OR is_featured)";

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List one page of projects matching `filter`.
    ///
    /// Ordered by `sort_order` then newest first; the featured listing is
    /// ordered by most recent update instead.
    pub async fn list(
        pool: &PgPool,
        filter: &ProjectFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let order = if filter.featured {
            "updated_date DESC, id DESC"
        } else {
            "sort_order ASC, created_date DESC, id DESC"
        };
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE {FILTER} ORDER BY {order} LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filter.category.map(|c| c.as_str()))
            .bind(filter.featured)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count projects matching `filter`.
    pub async fn count(pool: &PgPool, filter: &ProjectFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM projects WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(filter.category.map(|c| c.as_str()))
            .bind(filter.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a project, generating a unique slug from the title unless
    /// one is supplied.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, StoreError> {
        input.validate()?;
        let explicit = input
            .slug
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(normalize_slug)
            .transpose()?;

        let project = write_with_unique_slug(
            pool,
            SlugTable::Projects,
            &input.title,
            explicit,
            None,
            move |slug| Self::insert(pool, input, slug),
        )
        .await?;
        tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
        Ok(project)
    }

    /// Update a project. Returns `None` if it does not exist.
    ///
    /// The slug is kept unless the input clears it (`""`), in which case a
    /// new one is generated from the (possibly updated) title, or supplies
    /// a replacement.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        input.validate()?;
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let explicit = match input.slug.as_deref().map(str::trim) {
            None => return Ok(Self::apply_update(pool, id, input, None).await?),
            Some("") => None,
            Some(slug) => Some(normalize_slug(slug)?),
        };
        let title = input.title.as_deref().unwrap_or(&current.title);

        write_with_unique_slug(
            pool,
            SlugTable::Projects,
            title,
            explicit,
            Some(id),
            move |slug| Self::apply_update(pool, id, input, Some(slug)),
        )
        .await
    }

    async fn insert(
        pool: &PgPool,
        input: &CreateProject,
        slug: String,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, title_ru, title_en, description, description_ru, description_en,
                 category, slug, tags, featured_image, demo_url, github_url,
                 is_featured, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.title.trim())
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.description)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(input.category.as_str())
            .bind(slug)
            .bind(Json(&input.tags))
            .bind(&input.featured_image)
            .bind(&input.demo_url)
            .bind(&input.github_url)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    async fn apply_update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
        slug: Option<String>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                title_ru = COALESCE($3, title_ru),
                title_en = COALESCE($4, title_en),
                description = COALESCE($5, description),
                description_ru = COALESCE($6, description_ru),
                description_en = COALESCE($7, description_en),
                category = COALESCE($8, category),
                slug = COALESCE($9, slug),
                tags = COALESCE($10, tags),
                featured_image = COALESCE($11, featured_image),
                demo_url = COALESCE($12, demo_url),
                github_url = COALESCE($13, github_url),
                is_featured = COALESCE($14, is_featured),
                sort_order = COALESCE($15, sort_order),
                updated_date = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.description)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(input.category.map(|c| c.as_str()))
            .bind(slug)
            .bind(input.tags.as_ref().map(Json))
            .bind(&input.featured_image)
            .bind(&input.demo_url)
            .bind(&input.github_url)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }
}
