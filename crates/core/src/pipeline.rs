//! Record-processing pipeline.
//!
//! One reusable routine turns a decoded request body (a single record or a
//! batch of records) into zero-or-more persisted rows. Each resource plugs
//! in through [`RecordResource`]; the pipeline classifies the body once,
//! dispatches every item sequentially, aggregates partial failures, and
//! returns either the refreshed listing or a structured multi-error report.
//!
//! Failure semantics: a failing item never stops later items and never rolls
//! back earlier ones. All `insert_one` failures become data in the outcome;
//! only `list_all` errors propagate to the caller.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// ErrorDetail
// ---------------------------------------------------------------------------

/// The opaque error value an inserter reports for one failing record.
///
/// The pipeline never interprets its contents; it only distinguishes
/// "no error" (an `Ok` insert) from "some error" (an `Err` carrying this).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{error_message}")]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub error_message: String,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Up-front classification of a decoded JSON request body.
///
/// Decided once, before any store access. Note the asymmetry at the empty
/// boundary: an empty array is a valid (empty) batch, while an empty object
/// carries no record and is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A single keyed record (non-empty JSON object).
    Single(Value),
    /// An ordered sequence of records (any JSON array, including empty).
    Batch(Vec<Value>),
    /// Anything else: empty object, null, scalar, string.
    Invalid(Value),
}

impl Submission {
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Array(items) => Submission::Batch(items),
            Value::Object(map) if !map.is_empty() => Submission::Single(Value::Object(map)),
            other => Submission::Invalid(other),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordResource
// ---------------------------------------------------------------------------

/// The seam between the pipeline and a concrete resource.
///
/// `insert_one` persists a single raw record; field decoding and store
/// constraints are the implementation's concern, and any failure is reported
/// as an [`ErrorDetail`] value rather than an error that aborts the batch.
/// `list_all` produces the full current listing; its error type is
/// propagated unchanged through [`process_records`].
#[async_trait]
pub trait RecordResource {
    type Listing: Serialize + Send;
    type ListError: Send;

    async fn insert_one(&self, record: &Value) -> Result<(), ErrorDetail>;

    async fn list_all(&self) -> Result<Self::Listing, Self::ListError>;
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// One failed item in an aggregate report: the record exactly as submitted,
/// paired with the error its inserter returned.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedRecord {
    pub original_body: Value,
    pub error: ErrorDetail,
}

/// The three result shapes of one pipeline invocation.
///
/// Serializes untagged so the wire shape is exactly one of the three JSON
/// bodies the API has always produced.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProcessOutcome<L> {
    /// The body was neither a record nor a batch. Returned before any store
    /// access; echoes the offending body back to the caller.
    #[serde(rename_all = "camelCase")]
    InvalidBody {
        error_message: String,
        request_body: Value,
    },
    /// At least one item failed. Failures appear in insertion order.
    #[serde(rename_all = "camelCase")]
    Failed {
        error_message: String,
        errors: Vec<FailedRecord>,
    },
    /// Every item succeeded; carries the refreshed listing.
    Succeeded(L),
}

// ---------------------------------------------------------------------------
// process_records
// ---------------------------------------------------------------------------

/// Process one request body against a resource.
///
/// A single-object body is a batch of one. Items are inserted one at a time,
/// in their given order; `list_all` runs exactly once, and only if every
/// item succeeded. Already-inserted rows from earlier items in a partially
/// failing batch remain committed.
pub async fn process_records<R: RecordResource>(
    body: Value,
    resource: &R,
    invalid_body_message: &str,
) -> Result<ProcessOutcome<R::Listing>, R::ListError> {
    let records = match Submission::classify(body) {
        Submission::Invalid(body) => {
            return Ok(ProcessOutcome::InvalidBody {
                error_message: invalid_body_message.to_string(),
                request_body: body,
            });
        }
        Submission::Single(record) => vec![record],
        Submission::Batch(records) => records,
    };

    let total = records.len();
    let mut failures = Vec::new();

    for record in records {
        if let Err(error) = resource.insert_one(&record).await {
            failures.push(FailedRecord {
                original_body: record,
                error,
            });
        }
    }

    if failures.is_empty() {
        let listing = resource.list_all().await?;
        Ok(ProcessOutcome::Succeeded(listing))
    } else {
        Ok(ProcessOutcome::Failed {
            error_message: format!(
                "{} out of {} record(s) failed upon submission!",
                failures.len(),
                total
            ),
            errors: failures,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
