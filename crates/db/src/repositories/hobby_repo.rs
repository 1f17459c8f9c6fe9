//! Repository for the `hobbies` table.

use sqlx::FromRow;

use crate::models::hobby::{CreateHobby, HobbyView};
use crate::models::image::ImageView;
use crate::repositories::ImageRepo;
use crate::DbPool;

/// Flat join row backing [`HobbyView`].
#[derive(FromRow)]
struct HobbyRow {
    title: String,
    description: String,
    source: String,
    alt: String,
}

impl From<HobbyRow> for HobbyView {
    fn from(row: HobbyRow) -> Self {
        HobbyView {
            title: row.title,
            description: row.description,
            image: ImageView {
                source: row.source,
                alt: row.alt,
            },
        }
    }
}

/// Insert and listing for hobbies.
pub struct HobbyRepo;

impl HobbyRepo {
    /// Resolve the hobby image, then insert the row.
    pub async fn insert(pool: &DbPool, input: &CreateHobby) -> Result<(), sqlx::Error> {
        let image_id = ImageRepo::find_or_create(pool, &input.image_source, &input.image_alt).await?;

        sqlx::query("INSERT INTO hobbies (title, description, hobby_image) VALUES (?, ?, ?)")
            .bind(&input.title)
            .bind(&input.description)
            .bind(image_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Full listing with the hobby image joined in, oldest first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<HobbyView>, sqlx::Error> {
        let rows = sqlx::query_as::<_, HobbyRow>(
            "SELECT h.title, h.description, i.source, i.alt \
             FROM hobbies h \
             JOIN image_records i ON i.id = h.hobby_image \
             ORDER BY h.id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(HobbyView::from).collect())
    }
}
