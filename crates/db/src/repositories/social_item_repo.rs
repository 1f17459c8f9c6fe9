//! Repository for the `social_items` table.

use sqlx::FromRow;

use crate::models::image::ImageView;
use crate::models::social_item::{CreateSocialItem, SocialItemView};
use crate::repositories::ImageRepo;
use crate::DbPool;

/// Flat join row backing [`SocialItemView`].
#[derive(FromRow)]
struct SocialItemRow {
    title: String,
    link_page: String,
    source: String,
    alt: String,
}

impl From<SocialItemRow> for SocialItemView {
    fn from(row: SocialItemRow) -> Self {
        SocialItemView {
            title: row.title,
            link_page: row.link_page,
            image: ImageView {
                source: row.source,
                alt: row.alt,
            },
        }
    }
}

/// Insert and listing for social items.
pub struct SocialItemRepo;

impl SocialItemRepo {
    /// Resolve the social image, then insert the row.
    pub async fn insert(pool: &DbPool, input: &CreateSocialItem) -> Result<(), sqlx::Error> {
        let image_id = ImageRepo::find_or_create(pool, &input.image_source, &input.image_alt).await?;

        sqlx::query("INSERT INTO social_items (title, link_page, social_image) VALUES (?, ?, ?)")
            .bind(&input.title)
            .bind(&input.link_page)
            .bind(image_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Full listing with the social image joined in, oldest first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<SocialItemView>, sqlx::Error> {
        let rows = sqlx::query_as::<_, SocialItemRow>(
            "SELECT s.title, s.link_page, i.source, i.alt \
             FROM social_items s \
             JOIN image_records i ON i.id = s.social_image \
             ORDER BY s.id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(SocialItemView::from).collect())
    }
}
