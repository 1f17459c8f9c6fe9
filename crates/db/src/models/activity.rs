//! Activity models and DTOs. Activities carry no image reference.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub title: String,
    pub description: String,
}

/// DTO for submitting a new activity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivity {
    pub title: String,
    pub description: String,
}

/// Listing shape for `GET /activities`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityView {
    pub title: String,
    pub description: String,
}
