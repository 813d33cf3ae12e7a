//! The order record the tracker projects.
//!
//! Records arrive from the order API as JSON with camelCase field names and
//! are never mutated by the tracker. A host replaces the whole record when
//! the backend reports a change.
//!
//! # Example
//!
//! ```rust
//! use tracker_core::model::{OrderRecord, OrderStatus};
//!
//! let record = OrderRecord::from_json(r#"{
//!     "status": "Shipped",
//!     "paymentMethod": "card",
//!     "timestamps": { "shipped": "2024-03-01T10:00:00Z", "delivered": null }
//! }"#).unwrap();
//!
//! assert_eq!(record.status, OrderStatus::Shipped);
//! assert!(record.timestamp("delivered").is_none());
//! ```

use crate::error::TrackerError;
use crate::model::{OrderStatus, PaymentMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Order state as supplied by the order API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub status: OrderStatus,
    /// Missing or `null` both mean prepaid.
    #[serde(default, deserialize_with = "null_as_prepaid")]
    pub payment_method: PaymentMethod,
    /// Step key to the moment the order reached that step.
    #[serde(default)]
    pub timestamps: BTreeMap<String, Option<DateTime<Utc>>>,
    #[serde(default)]
    pub cancel_info: Option<CancelInfo>,
    #[serde(default)]
    pub return_request: Option<SubRequest>,
    #[serde(default)]
    pub replacement_request: Option<SubRequest>,
}

fn null_as_prepaid<'de, D>(deserializer: D) -> Result<PaymentMethod, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(PaymentMethod::from)
        .unwrap_or_default())
}

/// Who cancelled the order, when, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelInfo {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancelled_by_role: String,
}

/// A return or replacement raised against a delivered order.
///
/// Only requests with a status are shown on the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRequest {
    #[serde(default)]
    pub status: Option<String>,
}

impl SubRequest {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }
}

impl OrderRecord {
    /// Creates a record with no timestamps and no cancellation, return or replacement.
    pub fn new(status: impl Into<OrderStatus>, payment_method: impl Into<PaymentMethod>) -> Self {
        Self {
            status: status.into(),
            payment_method: payment_method.into(),
            timestamps: BTreeMap::new(),
            cancel_info: None,
            return_request: None,
            replacement_request: None,
        }
    }

    /// Parses a record from the order API's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_timestamp(mut self, key: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.timestamps.insert(key.into(), Some(at));
        self
    }

    pub fn with_cancel_info(mut self, info: CancelInfo) -> Self {
        self.cancel_info = Some(info);
        self
    }

    pub fn with_return(mut self, status: impl Into<String>) -> Self {
        self.return_request = Some(SubRequest::new(status));
        self
    }

    pub fn with_replacement(mut self, status: impl Into<String>) -> Self {
        self.replacement_request = Some(SubRequest::new(status));
        self
    }

    /// The recorded moment for a step key, if the backend sent one.
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.timestamps.get(key).copied().flatten()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.is_cancelled()
    }
}
