//! Icon glyph for each step key.

use crate::step::StepKey;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Clock,
    Card,
    Box,
    Truck,
    Pin,
    Check,
    Cross,
    UndoArrow,
    RepeatArrow,
    /// Fallback for keys outside the table.
    Bullet,
}

impl Glyph {
    pub fn for_step_key(key: StepKey) -> Self {
        match key {
            StepKey::Pending => Self::Clock,
            StepKey::Processing => Self::Card,
            StepKey::Packed => Self::Box,
            StepKey::Shipped => Self::Truck,
            StepKey::OutForDelivery => Self::Pin,
            StepKey::Delivered => Self::Check,
            StepKey::Cancelled => Self::Cross,
            StepKey::Returned => Self::UndoArrow,
            StepKey::Replacement => Self::RepeatArrow,
        }
    }

    /// Looks up a raw key. Exact lowercase match only; anything else is a bullet.
    ///
    /// [`render`](crate::render) only produces known [`StepKey`]s and uses
    /// [`Glyph::for_step_key`]. This is for hosts drawing keys straight from a
    /// payload, such as the keys of [`OrderRecord::timestamps`](crate::OrderRecord::timestamps).
    ///
    /// ```rust
    /// use tracker_core::Glyph;
    ///
    /// assert_eq!(Glyph::for_key("shipped"), Glyph::Truck);
    /// assert_eq!(Glyph::for_key("on_hold"), Glyph::Bullet);
    /// assert_eq!(Glyph::for_key("Shipped").symbol(), '•');
    /// ```
    pub fn for_key(key: &str) -> Self {
        match key {
            "pending" => Self::Clock,
            "processing" => Self::Card,
            "packed" => Self::Box,
            "shipped" => Self::Truck,
            "out_for_delivery" => Self::Pin,
            "delivered" => Self::Check,
            "cancelled" => Self::Cross,
            "returned" => Self::UndoArrow,
            "replacement" => Self::RepeatArrow,
            _ => Self::Bullet,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Card => "card",
            Self::Box => "box",
            Self::Truck => "truck",
            Self::Pin => "pin",
            Self::Check => "check",
            Self::Cross => "cross",
            Self::UndoArrow => "undo-arrow",
            Self::RepeatArrow => "repeat-arrow",
            Self::Bullet => "bullet",
        }
    }

    /// Single-character symbol for text output.
    pub fn symbol(&self) -> char {
        match self {
            Self::Clock => '⏱',
            Self::Card => '▭',
            Self::Box => '■',
            Self::Truck => '⛟',
            Self::Pin => '⌖',
            Self::Check => '✓',
            Self::Cross => '✗',
            Self::UndoArrow => '↶',
            Self::RepeatArrow => '⟳',
            Self::Bullet => '•',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_enum_lookups_agree() {
        for key in [
            StepKey::Pending,
            StepKey::Processing,
            StepKey::Packed,
            StepKey::Shipped,
            StepKey::OutForDelivery,
            StepKey::Delivered,
            StepKey::Cancelled,
            StepKey::Returned,
            StepKey::Replacement,
        ] {
            assert_eq!(Glyph::for_key(key.as_str()), Glyph::for_step_key(key));
        }
    }

    #[test]
    fn unknown_key_is_bullet() {
        assert_eq!(Glyph::for_key("on-hold"), Glyph::Bullet);
        assert_eq!(Glyph::for_key(""), Glyph::Bullet);
        assert_eq!(Glyph::Bullet.name(), "bullet");
    }

    #[test]
    fn names_match_table() {
        assert_eq!(Glyph::for_step_key(StepKey::OutForDelivery).name(), "pin");
        assert_eq!(Glyph::for_step_key(StepKey::Returned).name(), "undo-arrow");
        assert_eq!(Glyph::for_step_key(StepKey::Replacement).name(), "repeat-arrow");
    }
}
