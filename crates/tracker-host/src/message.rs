//! # Tracker Messages
//!
//! Requests sent from a [`TrackerClient`](crate::TrackerClient) to the
//! [`TrackerActor`](crate::TrackerActor). Each carries a oneshot sender for the reply.
//!
//! - **Upsert**: replace the record held for an order ("props changed").
//! - **Get**: the stored record, untouched.
//! - **Render**: project the stored record with the actor's clock as "now".
//! - **Remove**: forget an order.
//! - **Snapshot**: render every stored order, sorted by id.

use crate::error::HostError;
use crate::model::OrderId;
use tokio::sync::oneshot;
use tracker_core::{OrderRecord, TrackerView};

pub type Response<T> = oneshot::Sender<Result<T, HostError>>;

#[derive(Debug)]
pub enum TrackerRequest {
    Upsert {
        id: OrderId,
        record: OrderRecord,
        respond_to: Response<Option<OrderRecord>>,
    },
    Get {
        id: OrderId,
        respond_to: Response<Option<OrderRecord>>,
    },
    Render {
        id: OrderId,
        respond_to: Response<TrackerView>,
    },
    Remove {
        id: OrderId,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<Vec<(OrderId, TrackerView)>>,
    },
}
