//! Public contact form endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::contact::{
    ContactForm, MAX_NAME_LENGTH, MAX_PHONE_LENGTH, MIN_MESSAGE_LENGTH, MIN_NAME_LENGTH,
    THANK_YOU_MESSAGE,
};
use folio_db::models::contact::NewContactSubmission;
use folio_db::repositories::ContactRepo;
use serde_json::json;

use crate::error::AppResult;
use crate::extract::{ClientIp, JsonBody};
use crate::state::AppState;

/// GET /api/contact/
///
/// Usage documentation for the form endpoint.
pub async fn contact_usage() -> impl IntoResponse {
    Json(json!({
        "message": "Contact form API endpoint",
        "method": "POST",
        "required_fields": {
            "name": format!("string ({MIN_NAME_LENGTH}-{MAX_NAME_LENGTH} characters)"),
            "email": "string (valid email)",
            "phone": format!("string (optional, max {MAX_PHONE_LENGTH} characters)"),
            "message": format!("string (min {MIN_MESSAGE_LENGTH} characters)"),
            "consent_given": "boolean (must be true)",
        },
        "example": {
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "+79001234567",
            "message": "I am interested in your services.",
            "consent_given": true,
        },
    }))
}

/// POST /api/contact/
///
/// Validate and persist a submission, then notify. The 201 response does
/// not depend on whether the notification was delivered.
pub async fn submit_contact(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    JsonBody(form): JsonBody<ContactForm>,
) -> AppResult<impl IntoResponse> {
    let form = form.validated()?;
    let input = NewContactSubmission::from_form(form, ip.map(|ip| ip.to_string()));
    let submission = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(submission_id = submission.id, "Contact submission stored");

    let delivered = state.notifier.notify(&submission).await;
    tracing::debug!(submission_id = submission.id, delivered, "Contact notification attempted");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": submission.id,
            "status": "success",
            "message": THANK_YOU_MESSAGE,
        })),
    ))
}
