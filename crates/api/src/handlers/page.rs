use axum::extract::{Path, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_db::repositories::PageRepo;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::QueryParams;
use crate::query::LangParams;
use crate::response::page_view;
use crate::state::AppState;

/// GET /api/pages/{slug}/
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    QueryParams(params): QueryParams<LangParams>,
) -> AppResult<Json<Value>> {
    let page = PageRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found("StandardPage", &slug))?;

    Ok(Json(page_view(&page, params.language())))
}
