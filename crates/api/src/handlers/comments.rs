//! Handlers for the visitor comment wall.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use portfolio_db::models::comment::{Comment, CommentOutcome, CreateComment};
use portfolio_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /comments
///
/// Full comment listing, oldest first.
pub async fn list_comments(State(state): State<AppState>) -> AppResult<Json<Vec<Comment>>> {
    Ok(Json(CommentRepo::list_all(&state.pool).await?))
}

/// POST /comment
///
/// Upsert keyed by email: a first submission inserts, a repeat submission
/// from the same email overwrites the comment text and timestamp. The
/// outcome's `created` flag distinguishes the two.
pub async fn submit_comment(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<Json<CommentOutcome>> {
    let outcome = CommentRepo::upsert(&state.pool, &input, Utc::now()).await?;
    Ok(Json(outcome))
}
