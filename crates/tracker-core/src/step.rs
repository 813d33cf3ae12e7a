//! Step keys and the step union produced by [`derive_steps`](crate::steps::derive_steps).

use serde::Serialize;

/// Identifier of a tracker step.
///
/// The first seven mirror [`OrderStatus`](crate::model::OrderStatus); `Returned`
/// and `Replacement` only ever appear on detached steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKey {
    Pending,
    Processing,
    Packed,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
    Returned,
    Replacement,
}

impl StepKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Packed => "packed",
            Self::Shipped => "shipped",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
            Self::Replacement => "replacement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Packed => "Packed",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Returned => "Returned",
            Self::Replacement => "Replacement",
        }
    }

    /// Case-insensitive comparison against a raw status string.
    pub fn matches(&self, status: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(status)
    }
}

impl std::fmt::Display for StepKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry on the tracker.
///
/// Linear steps form the fulfillment chain and take part in current/completed
/// marking and connector lines. Detached steps are post-delivery branches with
/// their own status; they are always placed after every linear step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Linear {
        key: StepKey,
    },
    Detached {
        key: StepKey,
        status: String,
        finalized: bool,
    },
}

impl Step {
    pub fn linear(key: StepKey) -> Self {
        Self::Linear { key }
    }

    pub fn key(&self) -> StepKey {
        match self {
            Self::Linear { key } | Self::Detached { key, .. } => *key,
        }
    }

    pub fn label(&self) -> &'static str {
        self.key().label()
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Self::Detached { .. })
    }
}
