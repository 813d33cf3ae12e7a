//! Error types for the tracker core.
//!
//! The projection itself never fails. Errors only come from decoding records
//! and from validating render options before a projection runs.

use thiserror::Error;

/// Errors raised while preparing input for the tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The order payload was not valid JSON or did not match the record shape.
    #[error("Order record decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The absolute date format contains an unsupported strftime specifier.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
}
