//! Repository for the `academic_records` table.

use sqlx::FromRow;

use crate::models::academic_record::{AcademicRecordView, CreateAcademicRecord, DegreeView};
use crate::models::image::ImageView;
use crate::repositories::ImageRepo;
use crate::DbPool;

/// Flat join row backing [`AcademicRecordView`].
#[derive(FromRow)]
struct AcademicRecordRow {
    time_period: String,
    degree_link: String,
    degree_title: String,
    degree_description: String,
    source: String,
    alt: String,
}

impl From<AcademicRecordRow> for AcademicRecordView {
    fn from(row: AcademicRecordRow) -> Self {
        AcademicRecordView {
            time_period: row.time_period,
            image: ImageView {
                source: row.source,
                alt: row.alt,
            },
            degree: DegreeView {
                link: row.degree_link,
                title: row.degree_title,
                description: row.degree_description,
            },
        }
    }
}

/// Insert and listing for academic records.
pub struct AcademicRecordRepo;

impl AcademicRecordRepo {
    /// Resolve the institution image, then insert the record row.
    pub async fn insert(pool: &DbPool, input: &CreateAcademicRecord) -> Result<(), sqlx::Error> {
        let image_id = ImageRepo::find_or_create(pool, &input.image_source, &input.image_alt).await?;

        sqlx::query(
            "INSERT INTO academic_records \
                 (time_period, degree_link, degree_title, degree_description, institution_image) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.time_period)
        .bind(&input.degree_link)
        .bind(&input.degree_title)
        .bind(&input.degree_description)
        .bind(image_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Full listing with the institution image joined in, oldest first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<AcademicRecordView>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AcademicRecordRow>(
            "SELECT a.time_period, a.degree_link, a.degree_title, a.degree_description, \
                    i.source, i.alt \
             FROM academic_records a \
             JOIN image_records i ON i.id = a.institution_image \
             ORDER BY a.id",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(AcademicRecordView::from).collect())
    }
}
