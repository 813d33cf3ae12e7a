//! # Mock Tracker & Testing Guide
//!
//! Client-side code (loaders, pages, anything holding a [`TrackerClient`]) can be
//! tested without spawning a [`TrackerActor`](crate::TrackerActor).
//!
//! | Tool | Use it for |
//! |------|------------|
//! | [`MockTracker`] | Scripted replies in order; `verify()` checks all matched and were used |
//! | [`create_mock_client`] + `expect_*` | Inspecting each request by hand |
//! | Real actor with [`FixedClock`](crate::FixedClock) | Testing projection through the host |
//!
//! ```rust
//! use chrono::Utc;
//! use tracker_core::{render, OrderRecord};
//! use tracker_host::mock::MockTracker;
//!
//! #[tokio::main]
//! async fn main() {
//!     let view = render(&OrderRecord::new("packed", "cod"), Utc::now());
//!
//!     let mock = MockTracker::new();
//!     mock.expect_render("ord_1").return_ok(view.clone());
//!
//!     let client = mock.client();
//!     assert_eq!(client.render("ord_1".into()).await.unwrap(), view);
//!     mock.verify();
//! }
//! ```

use crate::client::TrackerClient;
use crate::error::HostError;
use crate::message::{Response, TrackerRequest};
use crate::model::OrderId;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};
use tracker_core::{OrderRecord, TrackerView};

enum Expectation {
    Upsert {
        id: OrderId,
        response: Result<Option<OrderRecord>, HostError>,
    },
    Get {
        id: OrderId,
        response: Result<Option<OrderRecord>, HostError>,
    },
    Render {
        id: OrderId,
        response: Result<TrackerView, HostError>,
    },
    Remove {
        id: OrderId,
        response: Result<(), HostError>,
    },
    Snapshot {
        response: Result<Vec<(OrderId, TrackerView)>, HostError>,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;
type Failures = Arc<Mutex<Vec<String>>>;

/// A scripted stand-in for the tracker actor.
///
/// Requests must arrive in the order the expectations were registered and for the
/// expected ids. A mismatch drops the reply, so the client sees
/// [`HostError::ActorDropped`], and is recorded for `verify()` to report.
pub struct MockTracker {
    client: TrackerClient,
    expectations: Expectations,
    failures: Failures,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn reply<T>(
    failures: &Failures,
    kind: &str,
    id: OrderId,
    want: OrderId,
    respond_to: Response<T>,
    response: Result<T, HostError>,
) {
    if id == want {
        let _ = respond_to.send(response);
    } else {
        failures
            .lock()
            .unwrap()
            .push(format!("{kind} for {id}, expected {want}"));
    }
}

impl MockTracker {
    /// Creates the mock. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<TrackerRequest>(100);
        let expectations: Expectations = Arc::new(Mutex::new(VecDeque::new()));
        let failures: Failures = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failed = failures.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                match (request, expectation) {
                    (
                        TrackerRequest::Upsert { id, respond_to, .. },
                        Some(Expectation::Upsert { id: want, response }),
                    ) => reply(&failed, "upsert", id, want, respond_to, response),
                    (
                        TrackerRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) => reply(&failed, "get", id, want, respond_to, response),
                    (
                        TrackerRequest::Render { id, respond_to },
                        Some(Expectation::Render { id: want, response }),
                    ) => reply(&failed, "render", id, want, respond_to, response),
                    (
                        TrackerRequest::Remove { id, respond_to },
                        Some(Expectation::Remove { id: want, response }),
                    ) => reply(&failed, "remove", id, want, respond_to, response),
                    (TrackerRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, Some(_)) => {
                        failed.lock().unwrap().push(format!("Unexpected request: {request:?}"));
                    }
                    (request, None) => {
                        failed.lock().unwrap().push(format!("Unscripted request: {request:?}"));
                    }
                }
            }
        });

        Self {
            client: TrackerClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    pub fn client(&self) -> TrackerClient {
        self.client.clone()
    }

    pub fn expect_upsert(&self, id: impl Into<OrderId>) -> UpsertExpectation {
        UpsertExpectation {
            id: id.into(),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&self, id: impl Into<OrderId>) -> GetExpectation {
        GetExpectation {
            id: id.into(),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_render(&self, id: impl Into<OrderId>) -> RenderExpectation {
        RenderExpectation {
            id: id.into(),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_remove(&self, id: impl Into<OrderId>) -> RemoveExpectation {
        RemoveExpectation {
            id: id.into(),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_snapshot(&self) -> SnapshotExpectation {
        SnapshotExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any request did not match its expectation or any expectation was not consumed.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            panic!("Mock tracker saw unexpected requests: {}", failures.join("; "));
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

pub struct UpsertExpectation {
    id: OrderId,
    expectations: Expectations,
}

impl UpsertExpectation {
    pub fn return_ok(self, previous: Option<OrderRecord>) {
        self.push(Ok(previous));
    }

    pub fn return_err(self, error: HostError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<OrderRecord>, HostError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Upsert {
            id: self.id,
            response,
        });
    }
}

pub struct GetExpectation {
    id: OrderId,
    expectations: Expectations,
}

impl GetExpectation {
    pub fn return_ok(self, record: Option<OrderRecord>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(record),
        });
    }
}

pub struct RenderExpectation {
    id: OrderId,
    expectations: Expectations,
}

impl RenderExpectation {
    pub fn return_ok(self, view: TrackerView) {
        self.push(Ok(view));
    }

    pub fn return_err(self, error: HostError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<TrackerView, HostError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Render {
            id: self.id,
            response,
        });
    }
}

pub struct RemoveExpectation {
    id: OrderId,
    expectations: Expectations,
}

impl RemoveExpectation {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: HostError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), HostError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Remove {
            id: self.id,
            response,
        });
    }
}

pub struct SnapshotExpectation {
    expectations: Expectations,
}

impl SnapshotExpectation {
    pub fn return_ok(self, views: Vec<(OrderId, TrackerView)>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Ok(views) });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (TrackerClient, mpsc::Receiver<TrackerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (TrackerClient::new(sender), receiver)
}

/// Next request, if it is an Upsert.
pub async fn expect_upsert(
    receiver: &mut mpsc::Receiver<TrackerRequest>,
) -> Option<(
    OrderId,
    OrderRecord,
    oneshot::Sender<Result<Option<OrderRecord>, HostError>>,
)> {
    match receiver.recv().await {
        Some(TrackerRequest::Upsert {
            id,
            record,
            respond_to,
        }) => Some((id, record, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Render.
pub async fn expect_render(
    receiver: &mut mpsc::Receiver<TrackerRequest>,
) -> Option<(OrderId, oneshot::Sender<Result<TrackerView, HostError>>)> {
    match receiver.recv().await {
        Some(TrackerRequest::Render { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
