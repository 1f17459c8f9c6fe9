//! Handlers for the content record resources.
//!
//! Every POST route accepts either a single record object or an array of
//! records and runs the shared record-processing pipeline; the response body
//! is whichever outcome the pipeline produced (refreshed listing, aggregate
//! failure report, or invalid-body echo), always with a 200 status. GET
//! routes return the full listing.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use portfolio_core::{process_records, ProcessOutcome};
use portfolio_db::models::academic_record::AcademicRecordView;
use portfolio_db::models::activity::ActivityView;
use portfolio_db::models::hobby::HobbyView;
use portfolio_db::models::social_item::SocialItemView;
use portfolio_db::models::work_record::WorkRecordView;
use portfolio_db::repositories::{
    AcademicRecordRepo, ActivityRepo, HobbyRepo, SocialItemRepo, WorkRecordRepo,
};

use crate::config::INVALID_BODY_MESSAGE;
use crate::error::AppResult;
use crate::resources::{AcademicRecords, Activities, Hobbies, SocialItems, WorkRecords};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Academic records
// ---------------------------------------------------------------------------

/// GET /academicRecords
pub async fn list_academic_records(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AcademicRecordView>>> {
    Ok(Json(AcademicRecordRepo::list_all(&state.pool).await?))
}

/// POST /academicRecord
pub async fn submit_academic_records(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ProcessOutcome<Vec<AcademicRecordView>>>> {
    let resource = AcademicRecords::new(state.pool.clone());
    Ok(Json(
        process_records(body, &resource, INVALID_BODY_MESSAGE).await?,
    ))
}

// ---------------------------------------------------------------------------
// Work records
// ---------------------------------------------------------------------------

/// GET /workRecords
pub async fn list_work_records(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WorkRecordView>>> {
    Ok(Json(WorkRecordRepo::list_all(&state.pool).await?))
}

/// POST /workRecord
pub async fn submit_work_records(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ProcessOutcome<Vec<WorkRecordView>>>> {
    let resource = WorkRecords::new(state.pool.clone());
    Ok(Json(
        process_records(body, &resource, INVALID_BODY_MESSAGE).await?,
    ))
}

// ---------------------------------------------------------------------------
// Hobbies
// ---------------------------------------------------------------------------

/// GET /hobbies
pub async fn list_hobbies(State(state): State<AppState>) -> AppResult<Json<Vec<HobbyView>>> {
    Ok(Json(HobbyRepo::list_all(&state.pool).await?))
}

/// POST /hobby
pub async fn submit_hobbies(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ProcessOutcome<Vec<HobbyView>>>> {
    let resource = Hobbies::new(state.pool.clone());
    Ok(Json(
        process_records(body, &resource, INVALID_BODY_MESSAGE).await?,
    ))
}

// ---------------------------------------------------------------------------
// Social items
// ---------------------------------------------------------------------------

/// GET /socialItems
pub async fn list_social_items(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SocialItemView>>> {
    Ok(Json(SocialItemRepo::list_all(&state.pool).await?))
}

/// POST /socialItem
pub async fn submit_social_items(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ProcessOutcome<Vec<SocialItemView>>>> {
    let resource = SocialItems::new(state.pool.clone());
    Ok(Json(
        process_records(body, &resource, INVALID_BODY_MESSAGE).await?,
    ))
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

/// GET /activities
pub async fn list_activities(State(state): State<AppState>) -> AppResult<Json<Vec<ActivityView>>> {
    Ok(Json(ActivityRepo::list_all(&state.pool).await?))
}

/// POST /activity
pub async fn submit_activities(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<ProcessOutcome<Vec<ActivityView>>>> {
    let resource = Activities::new(state.pool.clone());
    Ok(Json(
        process_records(body, &resource, INVALID_BODY_MESSAGE).await?,
    ))
}
