//! # Host Errors
//!
//! Failures of the hosting layer, from the actor channel and its task to
//! configuration and record loading. The projection itself cannot fail and has no
//! variant here.

use crate::model::OrderId;
use tracker_core::TrackerError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Tracker actor closed")]
    ActorClosed,
    #[error("Tracker actor dropped response channel")]
    ActorDropped,
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Record source error: {0}")]
    Source(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Tracker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
