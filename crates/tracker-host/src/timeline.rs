//! Plain-text rendering of a [`TrackerView`] for terminals and logs.

use std::fmt::Write;
use tracker_core::{Connector, TrackerView, VisualState};

/// One line per step, with connector rows between linear steps.
///
/// ```text
/// ▭ [x] Processing  2 days ago
///   ┃
/// ■ [>] Packed  3 hr ago
///   ┃
/// ⛟ [ ] Shipped
/// ```
pub fn format_timeline(view: &TrackerView) -> String {
    let mut out = String::new();
    for step in &view.steps {
        let marker = match step.state {
            VisualState::Completed | VisualState::Finalized => "[x]",
            VisualState::Current => "[>]",
            VisualState::Cancelled => "[-]",
            VisualState::PendingHighlight => "[!]",
            VisualState::Upcoming => "[ ]",
        };
        let _ = write!(out, "{} {marker} {}", step.glyph.symbol(), step.label);
        if let Some(status) = &step.detached_status {
            let _ = write!(out, " ({status})");
        }
        if let Some(when) = &step.annotation {
            let _ = write!(out, "  {when}");
        }
        out.push('\n');

        match step.connector {
            Some(Connector::Filled) => out.push_str("  ┃\n"),
            Some(Connector::Empty) => out.push_str("  ┆\n"),
            None => {}
        }
    }

    if let Some(note) = &view.cancellation {
        let _ = write!(out, "Cancelled by {}", note.by_role);
        if let Some(reason) = &note.reason {
            let _ = write!(out, ": {reason}");
        }
        if let Some(when) = &note.when {
            let _ = write!(out, " ({when})");
        }
        out.push('\n');
    }
    out
}
