//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; events carry `order_id` and `status` fields
//! instead.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin order-tracker             # lifecycle only
//! RUST_LOG=debug cargo run --bin order-tracker            # records and every render
//! RUST_LOG=tracker_core=debug cargo run --bin order-tracker
//! ```
//!
//! With `RUST_LOG=info` a demo run looks like:
//!
//! ```text
//! INFO Tracker started
//! INFO Upserted order_id=ord_1001 status=shipped replaced=false size=1
//! INFO Upserted order_id=ord_1002 status=cancelled replaced=false size=2
//! INFO Loaded records count=2
//! INFO Tracker shutdown size=2
//! ```
//!
//! `debug` adds the full record on each upsert and one `Rendered tracker` event per
//! projection with the step count and current index.

/// Initializes the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
