//! Hobby models and DTOs.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::ImageView;

/// A row from the `hobbies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hobby {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub hobby_image: DbId,
}

/// DTO for submitting a new hobby.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHobby {
    pub title: String,
    pub description: String,
    pub image_source: String,
    pub image_alt: String,
}

/// Listing shape for `GET /hobbies`.
#[derive(Debug, Clone, Serialize)]
pub struct HobbyView {
    pub title: String,
    pub description: String,
    pub image: ImageView,
}
