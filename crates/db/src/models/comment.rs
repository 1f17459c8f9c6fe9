//! Visitor comment models and DTOs.
//!
//! The invariant is one comment per email address: a second submission from
//! the same email overwrites the stored comment text and timestamp while
//! leaving the original name and email untouched.

use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub comment: String,
    pub updated_at: Timestamp,
}

/// DTO for submitting a comment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub comment: String,
}

/// Result of a comment upsert.
///
/// `created` is `true` when the submission inserted a fresh row and `false`
/// when it overwrote an existing comment for that email.
#[derive(Debug, Clone, Serialize)]
pub struct CommentOutcome {
    pub success: bool,
    pub created: bool,
}
