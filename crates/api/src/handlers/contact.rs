//! Handler for the contact email relay.
//!
//! Ordering is rate-limit check, then delivery, then ledger write. A
//! rejected or failed step responds with a `{ success: false, errorMessage }`
//! body and writes nothing, so only delivered emails ever occupy the
//! rate-limit window.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::Value;

use portfolio_core::{process_records, ProcessOutcome};
use portfolio_db::repositories::{EmailRequestRepo, RATE_LIMIT_WINDOW_SECS};
use portfolio_mailer::ContactMessage;

use crate::config::INVALID_BODY_MESSAGE;
use crate::error::AppResult;
use crate::resources::ContactLedger;
use crate::response::{ContactRejection, SuccessResponse};
use crate::state::AppState;

/// Rejection body when a contact email was relayed within the last 5 minutes.
pub const RATE_LIMIT_MESSAGE: &str =
    "Looks like another person sent an email recently! Please wait up to 5 minutes to try again!";

/// Rejection body when no SMTP relay is configured.
pub const UNCONFIGURED_MESSAGE: &str = "Email delivery is not configured!";

fn rejection(error_message: impl Into<String>) -> Response {
    Json(ContactRejection {
        success: false,
        error_message: error_message.into(),
    })
    .into_response()
}

/// POST /email
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Response> {
    let message: ContactMessage = match serde_json::from_value(body.clone()) {
        Ok(message) => message,
        Err(_) => {
            let outcome: ProcessOutcome<SuccessResponse> = ProcessOutcome::InvalidBody {
                error_message: INVALID_BODY_MESSAGE.to_string(),
                request_body: body,
            };
            return Ok(Json(outcome).into_response());
        }
    };

    let now = Utc::now().timestamp();
    if EmailRequestRepo::recent_exists(&state.pool, now, RATE_LIMIT_WINDOW_SECS).await? {
        tracing::info!(from = %message.email, "Contact submission rate-limited");
        return Ok(rejection(RATE_LIMIT_MESSAGE));
    }

    let Some(mailer) = &state.mailer else {
        tracing::warn!("Contact submission refused: SMTP relay not configured");
        return Ok(rejection(UNCONFIGURED_MESSAGE));
    };

    if let Err(err) = mailer.send_contact(&message).await {
        tracing::error!(error = %err, "Contact email delivery failed");
        return Ok(rejection(format!("Email could not be delivered: {err}")));
    }

    // Delivery succeeded; record it so the rate limiter sees this request.
    let ledger = ContactLedger::new(state.pool.clone());
    let outcome = process_records(body, &ledger, INVALID_BODY_MESSAGE).await?;
    Ok(Json(outcome).into_response())
}
