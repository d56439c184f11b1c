//! Admin content management endpoints.
//!
//! All handlers require [`RequireAdmin`]. Writes return the stored row in
//! its full (unlocalized) form.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::catalog::BlockSection;
use folio_core::contact::ContactStatus;
use folio_core::error::CoreError;
use folio_core::pagination::{clamp_limit, clamp_offset};
use folio_core::types::DbId;
use folio_db::models::page::UpsertPage;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::models::service::{CreateService, UpdateService};
use folio_db::models::ui_block::UpsertUiBlock;
use folio_db::repositories::{ContactRepo, PageRepo, ProjectRepo, ServiceRepo, UiBlockRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, QueryParams};
use crate::middleware::admin::RequireAdmin;
use crate::query::ContactListParams;
use crate::response::ListResponse;
use crate::state::AppState;

/// Default page size for the admin contact listing.
const DEFAULT_CONTACT_LIMIT: i64 = 20;

/// Largest page size for the admin contact listing.
const MAX_CONTACT_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// POST /api/admin/projects/
pub async fn create_project(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateProject>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/admin/projects/{id}/
///
/// Absent fields keep their value; `"slug": ""` regenerates the slug.
pub async fn update_project(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    tracing::info!(project_id = id, slug = %project.slug, "Project updated");
    Ok(Json(project))
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// POST /api/admin/services/
pub async fn create_service(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateService>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/admin/services/{id}/
pub async fn update_service(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateService>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Service", id))?;
    tracing::info!(service_id = id, slug = %service.slug, "Service updated");
    Ok(Json(service))
}

// ---------------------------------------------------------------------------
// Pages and UI blocks
// ---------------------------------------------------------------------------

/// PUT /api/admin/pages/{slug}/
pub async fn upsert_page(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    JsonBody(input): JsonBody<UpsertPage>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::upsert(&state.pool, &slug, &input).await?;
    tracing::info!(slug = %page.slug, "Standard page saved");
    Ok(Json(page))
}

/// PUT /api/admin/blocks/{section}/{key}/
pub async fn upsert_block(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path((section, key)): Path<(String, String)>,
    JsonBody(input): JsonBody<UpsertUiBlock>,
) -> AppResult<impl IntoResponse> {
    let section: BlockSection = section
        .parse()
        .map_err(|msg: String| CoreError::invalid("section", msg))?;
    let block = UiBlockRepo::upsert(&state.pool, section, &key, &input).await?;
    tracing::info!(section = %section, key = %block.key, "UI block saved");
    Ok(Json(block))
}

// ---------------------------------------------------------------------------
// Contact submissions
// ---------------------------------------------------------------------------

/// GET /api/admin/contact/
///
/// Newest first, optionally filtered by `status`, paged with `limit` /
/// `offset`.
pub async fn list_submissions(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ContactListParams>,
) -> AppResult<impl IntoResponse> {
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(ContactStatus::parse)
        .transpose()?;
    let limit = clamp_limit(params.limit, DEFAULT_CONTACT_LIMIT, MAX_CONTACT_LIMIT);
    let offset = clamp_offset(params.offset);

    let count = ContactRepo::count(&state.pool, status).await?;
    let results = ContactRepo::list(&state.pool, status, limit, offset).await?;
    Ok(Json(ListResponse { count, results }))
}

/// Request body for changing a submission's status.
#[derive(Debug, Deserialize)]
pub struct UpdateSubmissionStatus {
    pub status: String,
}

/// PATCH /api/admin/contact/{id}/
pub async fn update_submission_status(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateSubmissionStatus>,
) -> AppResult<impl IntoResponse> {
    let status = ContactStatus::parse(&input.status)?;
    let submission = ContactRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("ContactSubmission", id)))?;
    tracing::info!(
        submission_id = id,
        status = status.as_str(),
        "Contact submission status changed"
    );
    Ok(Json(submission))
}
