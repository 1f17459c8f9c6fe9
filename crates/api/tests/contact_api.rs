//! Integration tests for the contact relay route.
//!
//! No SMTP relay is configured in tests, so the reachable outcomes are the
//! rate-limit rejection, the unconfigured rejection, and the invalid-body
//! echo. Delivery itself is covered by the mailer crate's body-assembly
//! tests.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{body_json, post_json};
use portfolio_db::repositories::EmailRequestRepo;
use serde_json::json;
use sqlx::SqlitePool;

fn contact_body() -> serde_json::Value {
    json!({
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@example.com",
        "subject": "Hello",
        "message": "I would like to get in touch.",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unconfigured_relay_rejects_with_message(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/email", contact_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["errorMessage"], "Email delivery is not configured!");

    // Nothing may land in the ledger on a refused submission.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM email_requests")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn recent_ledger_entry_rate_limits_before_anything_else(pool: SqlitePool) {
    // A send 200 seconds ago is still inside the 5-minute window.
    let recent = Utc::now().timestamp() - 200;
    EmailRequestRepo::record(&pool, "other@example.com", recent)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(app, "/email", contact_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["errorMessage"],
        "Looks like another person sent an email recently! \
         Please wait up to 5 minutes to try again!"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn expired_ledger_entry_does_not_rate_limit(pool: SqlitePool) {
    // A send 400 seconds ago is outside the window; the submission falls
    // through to the next check (here: unconfigured relay).
    let stale = Utc::now().timestamp() - 400;
    EmailRequestRepo::record(&pool, "other@example.com", stale)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(app, "/email", contact_body()).await;

    let json = body_json(response).await;
    assert_eq!(json["errorMessage"], "Email delivery is not configured!");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn undecodable_contact_body_is_echoed_back(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = json!({"firstName": "Grace"});
    let response = post_json(app, "/email", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["errorMessage"], "Invalid body given on the request!");
    assert_eq!(json["requestBody"], body);
}
