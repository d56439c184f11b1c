pub mod admin;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health/                              service and database health
///
/// /projects/                            paginated, localized project list
/// /services/                            localized service list
/// /pages/{slug}/                        localized standard page
/// /blocks/                              {key: content} map of UI blocks
/// /contact/                             usage docs (GET), submit form (POST)
///
/// /admin/projects/                      create (POST)
/// /admin/projects/{id}/                 update (PUT)
/// /admin/services/                      create (POST)
/// /admin/services/{id}/                 update (PUT)
/// /admin/pages/{slug}/                  create or replace (PUT)
/// /admin/blocks/{section}/{key}/        create or replace (PUT)
/// /admin/contact/                       list submissions (GET)
/// /admin/contact/{id}/                  change status (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router())
}
