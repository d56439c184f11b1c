//! Public service listing.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::catalog::ServiceCategory;
use folio_core::localization::Language;
use folio_db::models::service::ServiceFilter;
use folio_db::repositories::ServiceRepo;

use crate::error::AppResult;
use crate::extract::QueryParams;
use crate::query::{flag_enabled, non_empty, ServiceListParams};
use crate::response::{ListResponse, ServiceView};
use crate::state::AppState;

/// GET /api/services/
///
/// Unpaginated; filter by `category` and `featured=true`.
pub async fn list_services(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ServiceListParams>,
) -> AppResult<Response> {
    let lang = Language::from_query(params.lang.as_deref());

    let category = match non_empty(params.category.as_deref()).map(str::parse::<ServiceCategory>) {
        None => None,
        Some(Ok(category)) => Some(category),
        // Categories outside the vocabulary match nothing.
        Some(Err(_)) => {
            let empty: ListResponse<ServiceView<'_>> = ListResponse::new(Vec::new());
            return Ok(Json(empty).into_response());
        }
    };
    let filter = ServiceFilter {
        category,
        featured: flag_enabled(params.featured.as_deref()),
    };

    let services = ServiceRepo::list(&state.pool, &filter).await?;
    let body = ListResponse::new(
        services
            .iter()
            .map(|s| ServiceView::new(s, lang))
            .collect(),
    );
    Ok(Json(body).into_response())
}
