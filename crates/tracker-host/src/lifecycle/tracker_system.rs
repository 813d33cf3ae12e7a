use crate::actor::TrackerActor;
use crate::client::TrackerClient;
use crate::clock::{Clock, SystemClock};
use crate::config::TrackerConfig;
use crate::error::HostError;
use crate::source::RecordSource;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, instrument};

/// Owns the running tracker actor and the client used to reach it.
///
/// Dropping every clone of [`client`](Self::client) stops the actor; prefer
/// [`shutdown`](Self::shutdown), which also waits for it to finish.
pub struct TrackerSystem {
    pub client: TrackerClient,
    handle: JoinHandle<()>,
}

impl TrackerSystem {
    /// Starts a tracker with default settings and the wall clock.
    pub fn new() -> Self {
        let (actor, client) = TrackerActor::new(
            TrackerConfig::default().buffer_size,
            Default::default(),
        );
        let handle = tokio::spawn(actor.run(Arc::new(SystemClock)));
        Self { client, handle }
    }

    /// Starts a tracker from `config`, reading "now" from `clock`.
    pub fn with_config(config: &TrackerConfig, clock: Arc<dyn Clock>) -> Result<Self, HostError> {
        let options = config.render_options()?;
        let (actor, client) = TrackerActor::new(config.buffer_size, options);
        let handle = tokio::spawn(actor.run(clock));
        Ok(Self { client, handle })
    }

    /// Pulls every record from `source` into the tracker. Returns how many were loaded.
    #[instrument(skip_all)]
    pub async fn load_from(&self, source: &dyn RecordSource) -> Result<usize, HostError> {
        load_records(&self.client, source).await
    }

    /// Closes the client and waits for the actor to drain.
    pub async fn shutdown(self) -> Result<(), HostError> {
        drop(self.client);
        Ok(self.handle.await?)
    }
}

impl Default for TrackerSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Upserts every record of `source` through `client`.
pub async fn load_records(client: &TrackerClient, source: &dyn RecordSource) -> Result<usize, HostError> {
    let records = source.fetch_all().await?;
    let count = records.len();
    for (id, record) in records {
        client.upsert(id, record).await?;
    }
    info!(count, "Loaded records");
    Ok(count)
}
