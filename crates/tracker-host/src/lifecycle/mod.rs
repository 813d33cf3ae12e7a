//! # System Lifecycle
//!
//! Starting, feeding, and stopping the tracker host.
//!
//! 1. **Start** - [`TrackerSystem::with_config`] validates the [`TrackerConfig`](crate::TrackerConfig),
//!    creates the actor and client, and spawns the actor with its [`Clock`](crate::Clock).
//!    The clock is injected at `run()` time, so tests can start the same system on a
//!    [`FixedClock`](crate::FixedClock).
//! 2. **Feed** - [`TrackerSystem::load_from`] pulls records from a
//!    [`RecordSource`](crate::RecordSource); callers can also upsert directly through
//!    `system.client` whenever the backend reports a change.
//! 3. **Stop** - [`TrackerSystem::shutdown`] drops the client. The actor sees its
//!    channel close, logs its final size, and exits; `shutdown` awaits that.
//!
//! Tracing is configured separately with [`setup_tracing`], once per process.

pub mod tracing;
pub mod tracker_system;

pub use tracker_system::*;
pub use self::tracing::*;
