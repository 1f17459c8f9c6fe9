//! Contact rate-limit ledger model.

use portfolio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `email_requests` table. `created_at` is unix seconds;
/// rows are written once and only ever compared against a recency cutoff.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmailRequest {
    pub id: DbId,
    pub email: String,
    pub created_at: i64,
}
