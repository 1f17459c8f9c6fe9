pub mod health;

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::handlers::{comments, contact, records};
use crate::response::AppMeta;
use crate::state::AppState;

/// GET / -- application metadata.
async fn app_meta() -> Json<AppMeta> {
    Json(AppMeta {
        app: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the flat application route table.
///
/// Listing routes use the plural path; submission routes use the singular.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(app_meta))
        .route("/academicRecords", get(records::list_academic_records))
        .route("/academicRecord", post(records::submit_academic_records))
        .route("/workRecords", get(records::list_work_records))
        .route("/workRecord", post(records::submit_work_records))
        .route("/hobbies", get(records::list_hobbies))
        .route("/hobby", post(records::submit_hobbies))
        .route("/socialItems", get(records::list_social_items))
        .route("/socialItem", post(records::submit_social_items))
        .route("/activities", get(records::list_activities))
        .route("/activity", post(records::submit_activities))
        .route("/comments", get(comments::list_comments))
        .route("/comment", post(comments::submit_comment))
        .route("/email", post(contact::submit_contact))
}
