//! Public project listing.

use axum::extract::{OriginalUri, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::catalog::ProjectCategory;
use folio_core::localization::Language;
use folio_core::pagination::PageWindow;
use folio_db::models::project::ProjectFilter;
use folio_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::QueryParams;
use crate::query::{flag_enabled, non_empty, page_link, request_base_url, ProjectListParams};
use crate::response::{PageResponse, ProjectView};
use crate::state::AppState;

/// GET /api/projects/
///
/// Filter by `category` and `featured=true` (which also orders by most
/// recent update), paginate with `page` / `page_size`, resolve text fields
/// for `lang`.
pub async fn list_projects(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    QueryParams(params): QueryParams<ProjectListParams>,
) -> AppResult<Response> {
    let window = PageWindow::new(params.page, params.page_size);
    let lang = Language::from_query(params.lang.as_deref());
    let featured = flag_enabled(params.featured.as_deref());

    // Categories outside the vocabulary match nothing.
    let category = match non_empty(params.category.as_deref()) {
        None => None,
        Some(raw) => match raw.parse::<ProjectCategory>() {
            Ok(category) => Some(category),
            Err(_) => {
                let empty: PageResponse<ProjectView<'_>> = PageResponse {
                    count: 0,
                    next: None,
                    previous: None,
                    results: Vec::new(),
                };
                return Ok(Json(empty).into_response());
            }
        },
    };
    let filter = ProjectFilter { category, featured };

    let count = ProjectRepo::count(&state.pool, &filter).await?;
    let projects =
        ProjectRepo::list(&state.pool, &filter, window.page_size(), window.offset()).await?;

    let base_url = request_base_url(state.config.public_base_url.as_deref(), &headers);
    let link = |page: i64| page_link(&base_url, uri.path(), uri.query(), page);

    let body = PageResponse {
        count,
        next: window.next_page(count).map(&link),
        previous: window.previous_page().map(&link),
        results: projects.iter().map(|p| ProjectView::new(p, lang)).collect(),
    };
    Ok(Json(body).into_response())
}
