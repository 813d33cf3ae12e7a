//! # Rendering Entry Point
//!
//! [`render`] is the one call a host makes: record plus "now" in, view model out.
//! It is pure, so calling it twice with the same arguments yields equal views.
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use tracker_core::{render, OrderRecord, VisualState};
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
//! let record = OrderRecord::new("shipped", "card")
//!     .with_timestamp("shipped", now - Duration::hours(3));
//!
//! let view = render(&record, now);
//! assert_eq!(view.current_index, Some(2));
//! assert_eq!(view.steps[2].state, VisualState::Current);
//! assert_eq!(view.steps[2].annotation.as_deref(), Some("3 hr ago"));
//! ```

use crate::error::TrackerError;
use crate::glyph::Glyph;
use crate::model::OrderRecord;
use crate::relative_time::{format_relative_with, validate_format, DEFAULT_ABSOLUTE_FORMAT};
use crate::step::{Step, StepKey};
use crate::steps::{current_step_index, derive_steps};
use crate::visual::{connector, visual_state, Connector, VisualState};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Presentation settings that do not change the step model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    absolute_format: String,
}

impl RenderOptions {
    pub fn new(absolute_format: impl Into<String>) -> Result<Self, TrackerError> {
        let absolute_format = absolute_format.into();
        validate_format(&absolute_format)?;
        Ok(Self { absolute_format })
    }

    pub fn absolute_format(&self) -> &str {
        &self.absolute_format
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            absolute_format: DEFAULT_ABSOLUTE_FORMAT.to_string(),
        }
    }
}

/// Everything the host needs to draw the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerView {
    pub cancelled: bool,
    pub current_index: Option<usize>,
    pub steps: Vec<StepView>,
    pub cancellation: Option<CancellationNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub key: StepKey,
    pub label: &'static str,
    pub glyph: Glyph,
    pub state: VisualState,
    pub detached: bool,
    /// Line to the next step; `None` for the last linear step and all detached ones.
    pub connector: Option<Connector>,
    /// Relative time the step was reached, linear steps only.
    pub annotation: Option<String>,
    /// Own status of a return or replacement.
    pub detached_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancellationNote {
    pub reason: Option<String>,
    pub by_role: String,
    pub when: Option<String>,
}

pub fn render(record: &OrderRecord, now: DateTime<Utc>) -> TrackerView {
    render_with(record, now, &RenderOptions::default())
}

pub fn render_with(record: &OrderRecord, now: DateTime<Utc>, options: &RenderOptions) -> TrackerView {
    let steps = derive_steps(record);
    let cancelled = record.is_cancelled();
    let current = current_step_index(&steps, record.status.as_str());
    let relative = |at: DateTime<Utc>| format_relative_with(at, now, options.absolute_format());

    let views = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let (annotation, detached_status) = match step {
                Step::Linear { key } => (step_time(record, *key).map(relative), None),
                Step::Detached { status, .. } => (None, Some(status.clone())),
            };
            StepView {
                key: step.key(),
                label: step.label(),
                glyph: Glyph::for_step_key(step.key()),
                state: visual_state(step, index, current, cancelled),
                detached: step.is_detached(),
                connector: connector(step, index, steps.get(index + 1), current, cancelled),
                annotation,
                detached_status,
            }
        })
        .collect::<Vec<_>>();

    let cancellation = record
        .cancel_info
        .as_ref()
        .filter(|_| cancelled)
        .map(|info| CancellationNote {
            reason: info.reason.clone(),
            by_role: info.cancelled_by_role.clone(),
            when: info.cancelled_at.map(relative),
        });

    debug!(status = %record.status, steps = views.len(), ?current, "Rendered tracker");

    TrackerView {
        cancelled,
        current_index: current,
        steps: views,
        cancellation,
    }
}

fn step_time(record: &OrderRecord, key: StepKey) -> Option<DateTime<Utc>> {
    let recorded = record.timestamp(key.as_str());
    if key == StepKey::Cancelled {
        recorded.or_else(|| record.cancel_info.as_ref().and_then(|info| info.cancelled_at))
    } else {
        recorded
    }
}

impl TrackerView {
    pub fn step(&self, key: StepKey) -> Option<&StepView> {
        self.steps.iter().find(|s| s.key == key)
    }

    pub fn linear_steps(&self) -> impl Iterator<Item = &StepView> {
        self.steps.iter().filter(|s| !s.detached)
    }

    pub fn detached_steps(&self) -> impl Iterator<Item = &StepView> {
        self.steps.iter().filter(|s| s.detached)
    }
}
