use axum::routing::get;
use axum::Router;

use crate::handlers::{contact, health, page, project, service, ui_block};
use crate::state::AppState;

/// Anonymous read endpoints and the contact form.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/", get(health::health_check))
        .route("/projects/", get(project::list_projects))
        .route("/services/", get(service::list_services))
        .route("/pages/{slug}/", get(page::get_page))
        .route("/blocks/", get(ui_block::list_blocks))
        .route(
            "/contact/",
            get(contact::contact_usage).post(contact::submit_contact),
        )
}
