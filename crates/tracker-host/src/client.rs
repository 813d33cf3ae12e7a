//! # Tracker Client
//!
//! Typed async API over the actor's request channel.

use crate::error::HostError;
use crate::message::TrackerRequest;
use crate::model::OrderId;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use tracker_core::{OrderRecord, TrackerView};

/// Handle for talking to a [`TrackerActor`](crate::TrackerActor).
///
/// Holds only a sender, so clones are cheap. The actor stops once every clone is dropped.
#[derive(Clone)]
pub struct TrackerClient {
    sender: mpsc::Sender<TrackerRequest>,
}

impl TrackerClient {
    pub fn new(sender: mpsc::Sender<TrackerRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, HostError>>) -> TrackerRequest,
    ) -> Result<T, HostError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| HostError::ActorClosed)?;
        response.await.map_err(|_| HostError::ActorDropped)?
    }

    /// Stores `record` for `id`, returning the record it replaced.
    #[instrument(skip(self, record), fields(status = %record.status))]
    pub async fn upsert(
        &self,
        id: OrderId,
        record: OrderRecord,
    ) -> Result<Option<OrderRecord>, HostError> {
        debug!("Sending upsert");
        self.request(|respond_to| TrackerRequest::Upsert {
            id,
            record,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<OrderRecord>, HostError> {
        self.request(|respond_to| TrackerRequest::Get { id, respond_to })
            .await
    }

    /// Renders the stored record for `id` as of the actor's clock.
    #[instrument(skip(self))]
    pub async fn render(&self, id: OrderId) -> Result<TrackerView, HostError> {
        debug!("Sending render");
        self.request(|respond_to| TrackerRequest::Render { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: OrderId) -> Result<(), HostError> {
        self.request(|respond_to| TrackerRequest::Remove { id, respond_to })
            .await
    }

    /// Renders every stored order, sorted by id.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Vec<(OrderId, TrackerView)>, HostError> {
        self.request(|respond_to| TrackerRequest::Snapshot { respond_to })
            .await
    }
}
