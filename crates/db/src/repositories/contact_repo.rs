//! Repository for the `contact_submissions` table.

use folio_core::contact::ContactStatus;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::contact::{ContactSubmission, NewContactSubmission};

/// Column list for contact_submissions queries.
const COLUMNS: &str = "id, name, email, phone, message, consent_given, \
    ip_address, status, submitted_at";

/// Provides persistence for contact form submissions. Submissions are
/// never deleted.
pub struct ContactRepo;

impl ContactRepo {
    /// Persist a submission with status `new`.
    ///
    /// Refuses submissions without consent before touching the database.
    pub async fn create(
        pool: &PgPool,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        if !input.consent_given {
            return Err(CoreError::invalid(
                "consent_given",
                "Consent must be given to submit this form.",
            )
            .into());
        }

        let query = format!(
            "INSERT INTO contact_submissions
                (name, email, phone, message, consent_given, ip_address, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let submission = sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(input.consent_given)
            .bind(&input.ip_address)
            .bind(ContactStatus::New.as_str())
            .fetch_one(pool)
            .await?;
        Ok(submission)
    }

    /// Find a submission by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<ContactStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY submitted_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(status.map(ContactStatus::as_str))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count submissions, optionally filtered by status.
    pub async fn count(pool: &PgPool, status: Option<ContactStatus>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contact_submissions WHERE ($1::TEXT IS NULL OR status = $1)",
        )
        .bind(status.map(ContactStatus::as_str))
        .fetch_one(pool)
        .await
    }

    /// Set the processing status. Returns `None` if the submission does
    /// not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ContactStatus,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
