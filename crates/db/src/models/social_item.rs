//! Social link models and DTOs.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::image::ImageView;

/// A row from the `social_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialItem {
    pub id: DbId,
    pub title: String,
    pub link_page: String,
    pub social_image: DbId,
}

/// DTO for submitting a new social item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSocialItem {
    pub title: String,
    pub link_page: String,
    pub image_source: String,
    pub image_alt: String,
}

/// Listing shape for `GET /socialItems`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialItemView {
    pub title: String,
    pub link_page: String,
    pub image: ImageView,
}
