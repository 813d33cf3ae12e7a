//! Human-readable "time ago" annotations.
//!
//! All thresholds use floored integer division of the elapsed milliseconds.
//! "Yesterday" means 24 to 47 hours elapsed, not the previous calendar day.
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use tracker_core::relative_time::format_relative;
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
//! assert_eq!(format_relative(now - Duration::minutes(45), now), "45 min ago");
//! assert_eq!(format_relative(now - Duration::hours(45), now), "Yesterday");
//! ```

use crate::error::TrackerError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Month abbreviation, day, 24-hour time: `Oct 9, 14:05`.
pub const DEFAULT_ABSOLUTE_FORMAT: &str = "%b %-d, %H:%M";

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_relative_with(at, now, DEFAULT_ABSOLUTE_FORMAT)
}

/// Like [`format_relative`], with a custom strftime pattern for timestamps a week or more old.
///
/// Timestamps in the future count as "Just now".
pub fn format_relative_with(at: DateTime<Utc>, now: DateTime<Utc>, absolute_format: &str) -> String {
    let elapsed_ms = (now - at).num_milliseconds();
    let minutes = elapsed_ms.div_euclid(MS_PER_MINUTE);
    let hours = elapsed_ms.div_euclid(MS_PER_HOUR);
    let days = hours.div_euclid(24);

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if hours < 24 {
        format!("{hours} hr ago")
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else {
        format_absolute(at, absolute_format)
    }
}

fn format_absolute(at: DateTime<Utc>, absolute_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", at.format(absolute_format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", at.format(DEFAULT_ABSOLUTE_FORMAT));
    }
    out
}

/// Rejects strftime patterns chrono cannot render.
pub fn validate_format(absolute_format: &str) -> Result<(), TrackerError> {
    if StrftimeItems::new(absolute_format).any(|item| matches!(item, Item::Error)) {
        return Err(TrackerError::InvalidDateFormat(absolute_format.to_string()));
    }
    Ok(())
}
