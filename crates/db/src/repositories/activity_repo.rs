//! Repository for the `activities` table. No image step here.

use crate::models::activity::{ActivityView, CreateActivity};
use crate::DbPool;

/// Insert and listing for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    pub async fn insert(pool: &DbPool, input: &CreateActivity) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO activities (title, description) VALUES (?, ?)")
            .bind(&input.title)
            .bind(&input.description)
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn list_all(pool: &DbPool) -> Result<Vec<ActivityView>, sqlx::Error> {
        sqlx::query_as::<_, ActivityView>(
            "SELECT title, description FROM activities ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
