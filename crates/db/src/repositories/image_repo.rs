//! Repository for the `image_records` table.

use portfolio_core::types::DbId;

use crate::DbPool;

/// Deduplicated image references keyed by source URL.
pub struct ImageRepo;

impl ImageRepo {
    /// Resolve an image reference to a row id, creating the row on first use.
    ///
    /// Lookup is by exact `source` match; an existing row wins and its `alt`
    /// text is never updated. The insert uses `ON CONFLICT DO NOTHING` so a
    /// concurrent creator of the same source converges on one row instead of
    /// failing or duplicating.
    pub async fn find_or_create(
        pool: &DbPool,
        source: &str,
        alt: &str,
    ) -> Result<DbId, sqlx::Error> {
        let existing: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM image_records WHERE source = ?")
                .bind(source)
                .fetch_optional(pool)
                .await?;

        if let Some(id) = existing {
            return Ok(id);
        }

        sqlx::query(
            "INSERT INTO image_records (source, alt) VALUES (?, ?) \
             ON CONFLICT(source) DO NOTHING",
        )
        .bind(source)
        .bind(alt)
        .execute(pool)
        .await?;

        sqlx::query_scalar("SELECT id FROM image_records WHERE source = ?")
            .bind(source)
            .fetch_one(pool)
            .await
    }
}
