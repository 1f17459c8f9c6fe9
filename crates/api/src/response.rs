//! Small shared response payloads.
//!
//! Listing and pipeline responses serialize their domain types directly;
//! the shapes here cover the remaining fixed envelopes.

use serde::Serialize;

/// `GET /` metadata payload.
#[derive(Debug, Serialize)]
pub struct AppMeta {
    pub app: &'static str,
    pub version: &'static str,
}

/// Bare success flag, used where a submission has nothing to list
/// (the contact ledger).
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Contact relay refusal: rate-limited, unconfigured, or failed delivery.
/// Always a 200-level body; the flag and message carry the outcome.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRejection {
    pub success: bool,
    pub error_message: String,
}
