//! Bindings between the record-processing pipeline and the repository layer.
//!
//! One [`RecordResource`] implementation per submittable resource. Each
//! `insert_one` decodes the raw record into its create DTO and runs the
//! repository insert; both decode failures and store constraint violations
//! become per-item [`ErrorDetail`] values, so one bad record never aborts
//! its batch siblings. Listing errors surface as [`AppError`] and propagate
//! through the pipeline to the handler.

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;

use portfolio_core::{ErrorDetail, RecordResource};
use portfolio_db::models::academic_record::{AcademicRecordView, CreateAcademicRecord};
use portfolio_db::models::activity::{ActivityView, CreateActivity};
use portfolio_db::models::hobby::{CreateHobby, HobbyView};
use portfolio_db::models::social_item::{CreateSocialItem, SocialItemView};
use portfolio_db::models::work_record::{CreateWorkRecord, WorkRecordView};
use portfolio_db::repositories::{
    AcademicRecordRepo, ActivityRepo, EmailRequestRepo, HobbyRepo, SocialItemRepo, WorkRecordRepo,
};
use portfolio_db::DbPool;
use portfolio_mailer::ContactMessage;

use crate::error::AppError;
use crate::response::SuccessResponse;

/// Decode one raw record into a create DTO, reporting failures as per-item
/// error data.
fn decode<T: DeserializeOwned>(record: &Value) -> Result<T, ErrorDetail> {
    serde_json::from_value(record.clone())
        .map_err(|e| ErrorDetail::new(format!("Invalid record fields: {e}")))
}

/// Map a store-level insert failure to per-item error data.
fn store_error(err: sqlx::Error) -> ErrorDetail {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ErrorDetail::new("Record violates a uniqueness constraint!")
        }
        _ => ErrorDetail::new(format!("Database error: {err}")),
    }
}

macro_rules! content_resource {
    ($name:ident, $dto:ty, $view:ty, $repo:ty) => {
        pub struct $name {
            pool: DbPool,
        }

        impl $name {
            pub fn new(pool: DbPool) -> Self {
                Self { pool }
            }
        }

        #[async_trait]
        impl RecordResource for $name {
            type Listing = Vec<$view>;
            type ListError = AppError;

            async fn insert_one(&self, record: &Value) -> Result<(), ErrorDetail> {
                let input: $dto = decode(record)?;
                <$repo>::insert(&self.pool, &input).await.map_err(store_error)
            }

            async fn list_all(&self) -> Result<Self::Listing, AppError> {
                Ok(<$repo>::list_all(&self.pool).await?)
            }
        }
    };
}

content_resource!(
    AcademicRecords,
    CreateAcademicRecord,
    AcademicRecordView,
    AcademicRecordRepo
);
content_resource!(WorkRecords, CreateWorkRecord, WorkRecordView, WorkRecordRepo);
content_resource!(Hobbies, CreateHobby, HobbyView, HobbyRepo);
content_resource!(SocialItems, CreateSocialItem, SocialItemView, SocialItemRepo);
content_resource!(Activities, CreateActivity, ActivityView, ActivityRepo);

/// The contact rate-limit ledger as a pipeline resource.
///
/// Each item appends one `email_requests` row stamped at submission time;
/// there is nothing to list, so the success path yields a bare success flag.
pub struct ContactLedger {
    pool: DbPool,
}

impl ContactLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordResource for ContactLedger {
    type Listing = SuccessResponse;
    type ListError = AppError;

    async fn insert_one(&self, record: &Value) -> Result<(), ErrorDetail> {
        let message: ContactMessage = decode(record)?;
        EmailRequestRepo::record(&self.pool, &message.email, Utc::now().timestamp())
            .await
            .map_err(store_error)
    }

    async fn list_all(&self) -> Result<SuccessResponse, AppError> {
        Ok(SuccessResponse { success: true })
    }
}
