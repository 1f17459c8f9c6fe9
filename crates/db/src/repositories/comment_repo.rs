//! Repository for the `comments` table.

use portfolio_core::types::{DbId, Timestamp};

use crate::models::comment::{Comment, CommentOutcome, CreateComment};
use crate::DbPool;

/// Upsert-by-email and listing for visitor comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment, or overwrite the existing one for the same email.
    ///
    /// An overwrite touches only `comment` and `updated_at`; the name and
    /// email from the original submission stay as first written. The
    /// returned outcome has `created: true` for a fresh insert and
    /// `created: false` for an overwrite.
    pub async fn upsert(
        pool: &DbPool,
        input: &CreateComment,
        now: Timestamp,
    ) -> Result<CommentOutcome, sqlx::Error> {
        let existing: Option<DbId> = sqlx::query_scalar("SELECT id FROM comments WHERE email = ?")
            .bind(&input.email)
            .fetch_optional(pool)
            .await?;

        match existing {
            Some(id) => {
                sqlx::query("UPDATE comments SET comment = ?, updated_at = ? WHERE id = ?")
                    .bind(&input.comment)
                    .bind(now)
                    .bind(id)
                    .execute(pool)
                    .await?;

                Ok(CommentOutcome {
                    success: true,
                    created: false,
                })
            }
            None => {
                sqlx::query(
                    "INSERT INTO comments (first_name, last_name, email, comment, updated_at) \
                     VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&input.first_name)
                .bind(&input.last_name)
                .bind(&input.email)
                .bind(&input.comment)
                .bind(now)
                .execute(pool)
                .await?;

                Ok(CommentOutcome {
                    success: true,
                    created: true,
                })
            }
        }
    }

    /// Full listing, oldest first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            "SELECT id, first_name, last_name, email, comment, updated_at \
             FROM comments ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Look up one comment by email. Used by tests and the upsert path.
    pub async fn find_by_email(
        pool: &DbPool,
        email: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            "SELECT id, first_name, last_name, email, comment, updated_at \
             FROM comments WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }
}
