use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Bearer-token protected content management routes, mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/", post(admin::create_project))
        .route("/projects/{id}/", put(admin::update_project))
        .route("/services/", post(admin::create_service))
        .route("/services/{id}/", put(admin::update_service))
        .route("/pages/{slug}/", put(admin::upsert_page))
        .route("/blocks/{section}/{key}/", put(admin::upsert_block))
        .route("/contact/", get(admin::list_submissions))
        .route("/contact/{id}/", patch(admin::update_submission_status))
}
