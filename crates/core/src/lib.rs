//! Portfolio backend domain core.
//!
//! Holds the record-processing pipeline and the shared primitive types.
//! This crate has no I/O dependencies; resources plug into the pipeline
//! through the [`pipeline::RecordResource`] trait.

pub mod pipeline;
pub mod types;

pub use pipeline::{
    process_records, ErrorDetail, FailedRecord, ProcessOutcome, RecordResource, Submission,
};
