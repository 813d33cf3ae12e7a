//! # Record Sources
//!
//! Where order records come from before they reach the tracker. In the admin
//! suite this is the order API; here the seam is the [`RecordSource`] trait so the
//! host can be fed from a file, a fixture, or a real fetch layer.
//!
//! The expected document is a JSON object keyed by order id:
//!
//! ```json
//! {
//!   "ord_1001": { "status": "shipped", "paymentMethod": "card" },
//!   "ord_1002": { "status": "cancelled", "paymentMethod": "cod",
//!                 "cancelInfo": { "reason": "Duplicate", "cancelledByRole": "admin" } }
//! }
//! ```

use crate::error::HostError;
use crate::model::OrderId;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, instrument};
use tracker_core::{OrderRecord, TrackerError};

/// Supplies the current set of order records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches every record, ordered by id.
    async fn fetch_all(&self) -> Result<Vec<(OrderId, OrderRecord)>, HostError>;
}

/// Records parsed from an in-memory JSON document.
#[derive(Debug, Clone)]
pub struct JsonSource {
    document: String,
}

impl JsonSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

#[async_trait]
impl RecordSource for JsonSource {
    async fn fetch_all(&self) -> Result<Vec<(OrderId, OrderRecord)>, HostError> {
        parse_document(&self.document)
    }
}

/// Records read from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_all(&self) -> Result<Vec<(OrderId, OrderRecord)>, HostError> {
        let document = tokio::fs::read_to_string(&self.path).await?;
        debug!(bytes = document.len(), "Read record file");
        parse_document(&document)
    }
}

fn parse_document(document: &str) -> Result<Vec<(OrderId, OrderRecord)>, HostError> {
    let records: BTreeMap<OrderId, OrderRecord> =
        serde_json::from_str(document).map_err(TrackerError::from)?;
    Ok(records.into_iter().collect())
}
