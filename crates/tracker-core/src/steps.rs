//! # Step Derivation
//!
//! Turns an [`OrderRecord`] into the ordered list of [`Step`]s shown on the tracker.
//!
//! The list always has the same shape:
//!
//! ```text
//! [first, packed, shipped, out_for_delivery, delivered]   normal order
//! [first, cancelled]                                      cancelled order
//! ... followed by [returned] and/or [replacement]         detached branches
//! ```
//!
//! `first` is `pending` for cash-on-delivery orders (nothing to confirm online,
//! the order waits) and `processing` for prepaid ones.

use crate::model::{OrderRecord, SubRequest};
use crate::step::{Step, StepKey};

/// Refund closes a return.
pub const RETURN_FINAL_STATUS: &str = "refunded";

/// Shipping the new item closes a replacement.
pub const REPLACEMENT_FINAL_STATUS: &str = "shipped";

const FULFILLMENT_CHAIN: [StepKey; 4] = [
    StepKey::Packed,
    StepKey::Shipped,
    StepKey::OutForDelivery,
    StepKey::Delivered,
];

/// Builds the step list for a record.
pub fn derive_steps(record: &OrderRecord) -> Vec<Step> {
    let first = if record.payment_method.is_cash_on_delivery() {
        StepKey::Pending
    } else {
        StepKey::Processing
    };

    let mut steps = vec![Step::linear(first)];
    if record.is_cancelled() {
        steps.push(Step::linear(StepKey::Cancelled));
    } else {
        steps.extend(FULFILLMENT_CHAIN.into_iter().map(Step::linear));
    }

    if let Some(step) = detached(
        StepKey::Returned,
        record.return_request.as_ref(),
        RETURN_FINAL_STATUS,
    ) {
        steps.push(step);
    }
    if let Some(step) = detached(
        StepKey::Replacement,
        record.replacement_request.as_ref(),
        REPLACEMENT_FINAL_STATUS,
    ) {
        steps.push(step);
    }

    steps
}

fn detached(key: StepKey, request: Option<&SubRequest>, final_status: &str) -> Option<Step> {
    let status = request?.status.clone()?;
    let finalized = status == final_status;
    Some(Step::Detached {
        key,
        status,
        finalized,
    })
}

/// Position of the step whose key matches `status`, ignoring case.
///
/// Detached steps are searched too, in construction order. An unrecognized
/// status matches nothing and yields `None`, leaving every step unmarked.
pub fn current_step_index(steps: &[Step], status: &str) -> Option<usize> {
    steps.iter().position(|step| step.key().matches(status))
}
