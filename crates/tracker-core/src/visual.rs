//! Visual state of each step and of the connectors between them.

use crate::step::Step;
use serde::Serialize;

/// How a single step is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    /// Not reached yet (also every step when the status is unrecognized).
    Upcoming,
    /// Reached and passed.
    Completed,
    /// Reached; the order is here now. Counts as completed.
    Current,
    /// Any linear step of a cancelled order.
    Cancelled,
    /// Detached step whose sub-workflow is still open.
    PendingHighlight,
    /// Detached step whose sub-workflow reached its terminal status.
    Finalized,
}

impl VisualState {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed | Self::Current)
    }

    /// CSS-style class name for the host's stylesheet.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Upcoming => "step-upcoming",
            Self::Completed => "step-completed",
            Self::Current => "step-current",
            Self::Cancelled => "step-cancelled",
            Self::PendingHighlight => "step-pending",
            Self::Finalized => "step-finalized",
        }
    }
}

/// Line drawn from a linear step down to the next linear step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    Filled,
    Empty,
}

pub fn visual_state(step: &Step, index: usize, current: Option<usize>, cancelled: bool) -> VisualState {
    match step {
        Step::Detached { finalized: true, .. } => VisualState::Finalized,
        Step::Detached { .. } => VisualState::PendingHighlight,
        Step::Linear { .. } if cancelled => VisualState::Cancelled,
        Step::Linear { .. } => match current {
            Some(c) if index == c => VisualState::Current,
            Some(c) if index < c => VisualState::Completed,
            _ => VisualState::Upcoming,
        },
    }
}

/// Connector below `step`, or `None` when either end is detached or `step` is last.
pub fn connector(
    step: &Step,
    index: usize,
    next: Option<&Step>,
    current: Option<usize>,
    cancelled: bool,
) -> Option<Connector> {
    match (step, next) {
        (Step::Linear { .. }, Some(Step::Linear { .. })) => {
            if visual_state(step, index, current, cancelled).is_completed() {
                Some(Connector::Filled)
            } else {
                Some(Connector::Empty)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKey;

    fn detached(finalized: bool) -> Step {
        Step::Detached {
            key: StepKey::Returned,
            status: "approved".to_string(),
            finalized,
        }
    }

    #[test]
    fn linear_marking_follows_current_index() {
        let step = Step::linear(StepKey::Packed);
        assert_eq!(visual_state(&step, 0, Some(2), false), VisualState::Completed);
        assert_eq!(visual_state(&step, 2, Some(2), false), VisualState::Current);
        assert_eq!(visual_state(&step, 3, Some(2), false), VisualState::Upcoming);
        assert_eq!(visual_state(&step, 0, None, false), VisualState::Upcoming);
    }

    #[test]
    fn cancellation_overrides_linear_marking() {
        let step = Step::linear(StepKey::Cancelled);
        assert_eq!(visual_state(&step, 1, Some(1), true), VisualState::Cancelled);
        assert_eq!(visual_state(&step, 0, Some(1), true), VisualState::Cancelled);
    }

    #[test]
    fn detached_ignores_index_and_cancellation() {
        assert_eq!(visual_state(&detached(true), 5, Some(9), false), VisualState::Finalized);
        assert_eq!(visual_state(&detached(false), 5, Some(9), true), VisualState::PendingHighlight);
        assert_eq!(visual_state(&detached(false), 5, Some(5), false), VisualState::PendingHighlight);
    }

    #[test]
    fn current_counts_as_completed() {
        assert!(VisualState::Current.is_completed());
        assert!(VisualState::Completed.is_completed());
        assert!(!VisualState::Finalized.is_completed());
        assert!(!VisualState::Cancelled.is_completed());
        assert_eq!(VisualState::PendingHighlight.class_name(), "step-pending");
    }

    #[test]
    fn connectors_only_join_linear_steps() {
        let a = Step::linear(StepKey::Delivered);
        let b = Step::linear(StepKey::Shipped);
        assert_eq!(connector(&b, 2, Some(&a), Some(2), false), Some(Connector::Filled));
        assert_eq!(connector(&b, 2, Some(&a), Some(1), false), Some(Connector::Empty));
        assert_eq!(connector(&b, 2, Some(&a), Some(4), true), Some(Connector::Empty));
        assert_eq!(connector(&a, 4, Some(&detached(true)), Some(4), false), None);
        assert_eq!(connector(&detached(true), 5, Some(&detached(false)), None, false), None);
        assert_eq!(connector(&a, 4, None, Some(4), false), None);
    }
}
