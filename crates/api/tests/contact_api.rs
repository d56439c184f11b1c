//! Integration tests for the contact form endpoint and its Telegram
//! notification.

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json, post_raw};
use folio_db::repositories::ContactRepo;
use folio_notify::TelegramConfig;
use serde_json::{json, Value};
use sqlx::PgPool;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn valid_form() -> Value {
    json!({
        "name": "Anna Petrova",
        "email": "anna@example.com",
        "phone": "+79001234567",
        "message": "I would like to order a landing page.",
        "consent_given": true,
    })
}

fn config_with_telegram(server: &MockServer) -> folio_api::config::ServerConfig {
    let mut telegram = TelegramConfig::new("test-token", "42");
    telegram.api_base = server.uri();
    telegram.timeout = Duration::from_secs(2);
    folio_api::config::ServerConfig {
        telegram: Some(telegram),
        ..common::test_config()
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn valid_submission_is_stored(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/contact/", valid_form()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(
        json["message"],
        "Thank you for your submission! We'll get back to you soon."
    );

    let id = json["id"].as_i64().unwrap();
    let stored = ContactRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Anna Petrova");
    assert_eq!(stored.status, "new");
    assert!(stored.consent_given);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_consent_is_rejected_and_not_stored(pool: PgPool) {
    let mut form = valid_form();
    form["consent_given"] = json!(false);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/contact/", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(
        json["errors"]["consent_given"][0],
        "Consent must be given to submit this form."
    );
    assert_eq!(ContactRepo::count(&pool, None).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn field_errors_are_reported_together(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/contact/",
        json!({"name": "A", "email": "nope", "message": "short", "consent_given": true}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let errors = &body_json(response).await["errors"];
    assert!(errors["name"].is_array());
    assert!(errors["email"].is_array());
    assert!(errors["message"].is_array());
    assert!(errors.get("consent_given").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/contact/", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert!(json["errors"]["non_field_errors"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn forwarded_client_ip_is_recorded(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact/")
        .header("host", common::TEST_HOST)
        .header("content-type", "application/json")
        .header("x-forwarded-for", "203.0.113.7, 10.0.0.2")
        .body(Body::from(valid_form().to_string()))
        .unwrap();
    let response = common::send(app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = ContactRepo::list(&pool, None, 10, 0).await.unwrap();
    assert_eq!(stored[0].ip_address.as_deref(), Some("203.0.113.7"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_describes_the_form(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/contact/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["method"], "POST");
    assert_eq!(json["required_fields"]["name"], "string (2-100 characters)");
    assert_eq!(json["required_fields"]["consent_given"], "boolean (must be true)");
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn submission_is_sent_to_telegram(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .and(body_partial_json(json!({"chat_id": "42", "parse_mode": "HTML"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::build_test_app_with(pool, config_with_telegram(&server));
    let response = post_json(app, "/api/contact/", valid_form()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = sent["text"].as_str().unwrap();
    assert!(text.contains("Anna Petrova"));
    assert!(text.contains("anna@example.com"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn telegram_failure_does_not_fail_submission(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = common::build_test_app_with(pool.clone(), config_with_telegram(&server));
    let response = post_json(app, "/api/contact/", valid_form()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(ContactRepo::count(&pool, None).await.unwrap(), 1);
}
