//! Integration tests for the one-comment-per-email upsert.

use chrono::{Duration, Utc};
use portfolio_db::models::comment::CreateComment;
use portfolio_db::repositories::CommentRepo;
use sqlx::SqlitePool;

fn comment_from(email: &str, text: &str) -> CreateComment {
    CreateComment {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        comment: text.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn first_submission_inserts(pool: SqlitePool) {
    let outcome = CommentRepo::upsert(&pool, &comment_from("ada@example.com", "Hi!"), Utc::now())
        .await
        .unwrap();

    assert!(outcome.success);
    assert!(outcome.created);

    let stored = CommentRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .expect("comment should exist");
    assert_eq!(stored.comment, "Hi!");
}

#[sqlx::test(migrations = "./migrations")]
async fn second_submission_overwrites_in_place(pool: SqlitePool) {
    let t1 = Utc::now() - Duration::minutes(10);
    CommentRepo::upsert(&pool, &comment_from("ada@example.com", "First thoughts"), t1)
        .await
        .unwrap();

    let t2 = Utc::now();
    let mut second = comment_from("ada@example.com", "Changed my mind");
    // A different name on the second submission must not replace the stored one.
    second.first_name = "Augusta".to_string();

    let outcome = CommentRepo::upsert(&pool, &second, t2).await.unwrap();
    assert!(outcome.success);
    assert!(!outcome.created);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE email = ?")
        .bind("ada@example.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let stored = CommentRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.comment, "Changed my mind");
    assert_eq!(stored.first_name, "Ada");
    assert_eq!(stored.last_name, "Lovelace");
    assert!(stored.updated_at > t1);
}

#[sqlx::test(migrations = "./migrations")]
async fn distinct_emails_keep_distinct_rows(pool: SqlitePool) {
    CommentRepo::upsert(&pool, &comment_from("a@example.com", "one"), Utc::now())
        .await
        .unwrap();
    CommentRepo::upsert(&pool, &comment_from("b@example.com", "two"), Utc::now())
        .await
        .unwrap();

    let all = CommentRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}
