//! Integration tests for the contact rate-limit ledger.

use portfolio_db::repositories::{EmailRequestRepo, RATE_LIMIT_WINDOW_SECS};
use sqlx::SqlitePool;

const NOW: i64 = 1_700_000_000;

#[sqlx::test(migrations = "./migrations")]
async fn email_200s_ago_counts_as_recent(pool: SqlitePool) {
    EmailRequestRepo::record(&pool, "visitor@example.com", NOW - 200)
        .await
        .unwrap();

    let recent = EmailRequestRepo::recent_exists(&pool, NOW, RATE_LIMIT_WINDOW_SECS)
        .await
        .unwrap();
    assert!(recent);
}

#[sqlx::test(migrations = "./migrations")]
async fn email_400s_ago_does_not_count(pool: SqlitePool) {
    EmailRequestRepo::record(&pool, "visitor@example.com", NOW - 400)
        .await
        .unwrap();

    let recent = EmailRequestRepo::recent_exists(&pool, NOW, RATE_LIMIT_WINDOW_SECS)
        .await
        .unwrap();
    assert!(!recent);
}

#[sqlx::test(migrations = "./migrations")]
async fn window_boundary_is_strict(pool: SqlitePool) {
    // A row exactly window_secs old no longer blocks.
    EmailRequestRepo::record(&pool, "visitor@example.com", NOW - RATE_LIMIT_WINDOW_SECS)
        .await
        .unwrap();

    let recent = EmailRequestRepo::recent_exists(&pool, NOW, RATE_LIMIT_WINDOW_SECS)
        .await
        .unwrap();
    assert!(!recent);
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_ledger_allows(pool: SqlitePool) {
    let recent = EmailRequestRepo::recent_exists(&pool, NOW, RATE_LIMIT_WINDOW_SECS)
        .await
        .unwrap();
    assert!(!recent);
}
