//! Shared image reference model.
//!
//! Images are deduplicated by `source`: content rows reference one
//! `image_records` row per distinct source URL, created lazily on first
//! use. `alt` text is first-write-wins.

use portfolio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `image_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImageRecord {
    pub id: DbId,
    pub source: String,
    pub alt: String,
}

/// Image payload embedded in content listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImageView {
    pub source: String,
    pub alt: String,
}
