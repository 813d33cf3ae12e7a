//! # Tracker Actor
//!
//! The host side of the tracker: a single Tokio task that owns the current
//! record of every tracked order and re-runs the projection on request.

use crate::client::TrackerClient;
use crate::clock::Clock;
use crate::error::HostError;
use crate::message::TrackerRequest;
use crate::model::OrderId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracker_core::{render_with, OrderRecord, RenderOptions};

/// Owns the order records and answers [`TrackerRequest`]s.
///
/// Requests are handled one at a time in [`run`](Self::run), so the store needs no
/// lock. Records are replaced wholesale on upsert and views are never cached: every
/// render reads the latest record and the clock at that moment.
///
/// ```rust
/// use std::sync::Arc;
/// use tracker_core::{OrderRecord, RenderOptions};
/// use tracker_host::{SystemClock, TrackerActor};
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = TrackerActor::new(8, RenderOptions::default());
///     tokio::spawn(actor.run(Arc::new(SystemClock)));
///
///     client.upsert("ord_1".into(), OrderRecord::new("packed", "cod")).await.unwrap();
///     let view = client.render("ord_1".into()).await.unwrap();
///     assert_eq!(view.current_index, Some(1));
/// }
/// ```
pub struct TrackerActor {
    receiver: mpsc::Receiver<TrackerRequest>,
    store: HashMap<OrderId, OrderRecord>,
    options: RenderOptions,
}

impl TrackerActor {
    /// Creates the actor and a client connected to it.
    ///
    /// `buffer_size` bounds the request channel; senders wait when it is full.
    pub fn new(buffer_size: usize, options: RenderOptions) -> (Self, TrackerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            options,
        };
        (actor, TrackerClient::new(sender))
    }

    /// Processes requests until every client is dropped.
    pub async fn run(mut self, clock: Arc<dyn Clock>) {
        info!("Tracker started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TrackerRequest::Upsert {
                    id,
                    record,
                    respond_to,
                } => {
                    debug!(order_id = %id, ?record, "Upsert");
                    let status = record.status.clone();
                    let previous = self.store.insert(id.clone(), record);
                    info!(order_id = %id, %status, replaced = previous.is_some(), size = self.store.len(), "Upserted");
                    let _ = respond_to.send(Ok(previous));
                }
                TrackerRequest::Get { id, respond_to } => {
                    let record = self.store.get(&id).cloned();
                    debug!(order_id = %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                TrackerRequest::Render { id, respond_to } => {
                    let result = match self.store.get(&id) {
                        Some(record) => Ok(render_with(record, clock.now(), &self.options)),
                        None => {
                            warn!(order_id = %id, "Not found");
                            Err(HostError::NotFound(id))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                TrackerRequest::Remove { id, respond_to } => {
                    if self.store.remove(&id).is_some() {
                        info!(order_id = %id, size = self.store.len(), "Removed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(order_id = %id, "Not found");
                        let _ = respond_to.send(Err(HostError::NotFound(id)));
                    }
                }
                TrackerRequest::Snapshot { respond_to } => {
                    let now = clock.now();
                    let mut views: Vec<_> = self
                        .store
                        .iter()
                        .map(|(id, record)| (id.clone(), render_with(record, now, &self.options)))
                        .collect();
                    views.sort_by(|a, b| a.0.cmp(&b.0));
                    debug!(size = views.len(), "Snapshot");
                    let _ = respond_to.send(Ok(views));
                }
            }
        }

        info!(size = self.store.len(), "Tracker shutdown");
    }
}
