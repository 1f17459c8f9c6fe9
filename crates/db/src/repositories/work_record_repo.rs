//! Repository for the `work_records` table.

use sqlx::FromRow;

use crate::models::image::ImageView;
use crate::models::work_record::{CreateWorkRecord, WorkRecordView};
use crate::repositories::ImageRepo;
use crate::DbPool;

/// Flat join row backing [`WorkRecordView`].
#[derive(FromRow)]
struct WorkRecordRow {
    time_period: String,
    position: String,
    description: String,
    source: String,
    alt: String,
}

impl From<WorkRecordRow> for WorkRecordView {
    fn from(row: WorkRecordRow) -> Self {
        WorkRecordView {
            image: ImageView {
                source: row.source,
                alt: row.alt,
            },
            time_period: row.time_period,
            position: row.position,
            description: row.description,
        }
    }
}

/// Insert and listing for work records.
pub struct WorkRecordRepo;

impl WorkRecordRepo {
    /// Resolve the company image, then insert the record row.
    pub async fn insert(pool: &DbPool, input: &CreateWorkRecord) -> Result<(), sqlx::Error> {
        let image_id = ImageRepo::find_or_create(pool, &input.image_source, &input.image_alt).await?;

        sqlx::query(
            "INSERT INTO work_records (time_period, position, description, company_image) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&input.time_period)
        .bind(&input.position)
        .bind(&input.description)
        .bind(image_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Full listing with the company image joined in, oldest first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<WorkRecordView>, sqlx::Error> {
        let rows = sqlx::query_as::<_, WorkRecordRow>(
            "SELECT w.time_period, w.position, w.description, i.source, i.alt \
             FROM work_records w \
             JOIN image_records i ON i.id = w.company_image \
             ORDER BY w.id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(WorkRecordView::from).collect())
    }
}
