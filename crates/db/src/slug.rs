//! Store-backed unique slug assignment for projects and services.

use std::collections::HashSet;
use std::future::Future;

use folio_core::error::CoreError;
use folio_core::slug::{base_slug, generate_unique_slug};
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::{violates, StoreError};

/// Tables whose rows carry a generated slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugTable {
    Projects,
    Services,
}

impl SlugTable {
    fn table(self) -> &'static str {
        match self {
            SlugTable::Projects => "projects",
            SlugTable::Services => "services",
        }
    }

    fn entity(self) -> &'static str {
        match self {
            SlugTable::Projects => "project",
            SlugTable::Services => "service",
        }
    }

    /// Name of the unique constraint on the table's slug column.
    pub fn constraint(self) -> &'static str {
        match self {
            SlugTable::Projects => "uq_projects_slug",
            SlugTable::Services => "uq_services_slug",
        }
    }
}

/// Pick the first free slug for `text` in `table`, ignoring the row
/// `exclude_id` (the record being updated).
///
/// Loads every existing slug in the `base` / `base-N` family in one query,
/// then walks the candidate sequence against that set.
pub async fn unique_slug(
    pool: &PgPool,
    table: SlugTable,
    text: &str,
    exclude_id: Option<DbId>,
) -> Result<String, StoreError> {
    let base = base_slug(text);
    let query = format!(
        "SELECT slug FROM {} \
         WHERE (slug = $1 OR slug LIKE $2) \
           AND ($3::BIGINT IS NULL OR id <> $3)",
        table.table()
    );
    let taken: HashSet<String> = sqlx::query_scalar::<_, String>(&query)
        .bind(&base)
        .bind(format!("{base}-%"))
        .bind(exclude_id)
        .fetch_all(pool)
        .await?
        .into_iter()
        .collect();

    Ok(generate_unique_slug(text, |candidate| taken.contains(candidate))?)
}

/// Run `write` with a slug for `table`.
///
/// An `explicit` slug is used as-is. Otherwise a slug is generated from
/// `text`; if a concurrent writer claims it first, the write is retried
/// once with a fresh slug. A slug collision that survives that becomes
/// [`CoreError::Conflict`].
pub async fn write_with_unique_slug<T, F, Fut>(
    pool: &PgPool,
    table: SlugTable,
    text: &str,
    explicit: Option<String>,
    exclude_id: Option<DbId>,
    mut write: F,
) -> Result<T, StoreError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    if let Some(slug) = explicit {
        return write(slug).await.map_err(|e| slug_conflict(table, e));
    }

    let slug = unique_slug(pool, table, text, exclude_id).await?;
    match write(slug.clone()).await {
        Err(e) if violates(&e, table.constraint()) => {
            tracing::warn!(
                table = table.table(),
                slug = %slug,
                "Slug claimed concurrently, retrying"
            );
            let retry = unique_slug(pool, table, text, exclude_id).await?;
            write(retry).await.map_err(|e| slug_conflict(table, e))
        }
        result => Ok(result?),
    }
}

fn slug_conflict(table: SlugTable, err: sqlx::Error) -> StoreError {
    if violates(&err, table.constraint()) {
        CoreError::Conflict(format!("Slug is already used by another {}", table.entity()))
            .into()
    } else {
        err.into()
    }
}
