//! # Tracker Core
//!
//! Pure projection from an order record to the step-by-step status tracker
//! shown in the order administration pages.
//!
//! ## Pipeline
//!
//! 1. **Model** ([`model`]) - the [`OrderRecord`] as sent by the order API, with status
//!    and payment method normalized into enums.
//! 2. **Derivation** ([`steps`]) - the ordered [`Step`] list: a linear fulfillment chain
//!    (or its cancelled stub) followed by detached return/replacement branches.
//! 3. **Visual state** ([`visual`]) - completed/current/cancelled marking per step and
//!    filled/empty connectors between linear steps.
//! 4. **Annotations** ([`relative_time`], [`glyph`]) - "3 hr ago" labels and icons.
//! 5. **View** ([`render`]) - all of the above assembled into a serializable [`TrackerView`].
//!
//! ## Purity
//!
//! Nothing here performs I/O or reads the clock. The current time is a parameter,
//! so a view is a function of `(record, now)` alone.
//!
//! ## Unknown input
//!
//! Statuses outside the vocabulary never raise errors. They match no step, so every
//! step renders as upcoming. Keys outside the glyph table get a bullet.

pub mod error;
pub mod glyph;
pub mod model;
pub mod relative_time;
pub mod render;
pub mod step;
pub mod steps;
pub mod visual;

pub use error::TrackerError;
pub use glyph::Glyph;
pub use model::{CancelInfo, OrderRecord, OrderStatus, PaymentMethod, SubRequest};
pub use render::{render, render_with, CancellationNote, RenderOptions, StepView, TrackerView};
pub use step::{Step, StepKey};
pub use steps::{current_step_index, derive_steps};
pub use visual::{Connector, VisualState};
