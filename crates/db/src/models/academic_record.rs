//! Academic record models and DTOs.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::ImageView;

/// A row from the `academic_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AcademicRecord {
    pub id: DbId,
    pub time_period: String,
    pub degree_link: String,
    pub degree_title: String,
    pub degree_description: String,
    pub institution_image: DbId,
}

/// DTO for submitting a new academic record. Carries the institution image
/// inline; the repository resolves it to a shared image row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcademicRecord {
    pub time_period: String,
    pub degree_link: String,
    pub degree_title: String,
    pub degree_description: String,
    pub image_source: String,
    pub image_alt: String,
}

/// Degree detail nested inside [`AcademicRecordView`].
#[derive(Debug, Clone, Serialize)]
pub struct DegreeView {
    pub link: String,
    pub title: String,
    pub description: String,
}

/// Listing shape for `GET /academicRecords`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicRecordView {
    pub time_period: String,
    pub image: ImageView,
    pub degree: DegreeView,
}
