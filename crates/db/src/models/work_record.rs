//! Work record models and DTOs.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::ImageView;

/// A row from the `work_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkRecord {
    pub id: DbId,
    pub time_period: String,
    pub position: String,
    pub description: String,
    pub company_image: DbId,
}

/// DTO for submitting a new work record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkRecord {
    pub time_period: String,
    pub position: String,
    pub description: String,
    pub image_source: String,
    pub image_alt: String,
}

/// Listing shape for `GET /workRecords`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecordView {
    pub image: ImageView,
    pub time_period: String,
    pub position: String,
    pub description: String,
}
