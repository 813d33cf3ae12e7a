//! # Tracker Host
//!
//! Runs the [`tracker_core`] projection for many orders at once and re-renders an
//! order whenever its record changes.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`actor`], [`message`], [`client`])
//! A single [`TrackerActor`] task owns every record and handles [`TrackerRequest`]s
//! sequentially, so the store needs no locks. [`TrackerClient`] is the typed,
//! cloneable handle the rest of the application uses.
//!
//! ### 2. Time ([`clock`])
//! The projection never reads the system clock. The actor gets a [`Clock`] at
//! `run()` time and passes `clock.now()` into every render.
//!
//! ### 3. Inputs ([`source`], [`config`])
//! [`RecordSource`] is the seam to the order API; [`JsonSource`] and
//! [`JsonFileSource`] feed fixtures and files. [`TrackerConfig`] holds the channel
//! size and date format, from defaults, JSON, or `ORDER_TRACKER_*` variables.
//!
//! ### 4. Orchestration ([`lifecycle`])
//! [`TrackerSystem`] starts, feeds, and stops the actor; [`setup_tracing`] wires
//! structured logs.
//!
//! ### 5. Output ([`timeline`])
//! [`format_timeline`] turns a view into terminal text. Hosts with a UI serialize
//! the [`TrackerView`](tracker_core::TrackerView) instead.
//!
//! ## Testing
//!
//! [`mock`] offers a scripted [`MockTracker`](mock::MockTracker) and raw channel
//! helpers for testing client code without a running actor.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run --bin order-tracker -- crates/tracker-host/demos/orders.json
//! ```

pub mod actor;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod message;
pub mod mock;
pub mod model;
pub mod source;
pub mod timeline;

pub use actor::TrackerActor;
pub use client::TrackerClient;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::TrackerConfig;
pub use error::HostError;
pub use lifecycle::{load_records, setup_tracing, TrackerSystem};
pub use message::{Response, TrackerRequest};
pub use model::OrderId;
pub use source::{JsonFileSource, JsonSource, RecordSource};
pub use timeline::format_timeline;
