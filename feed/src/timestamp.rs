//! Log line timestamps in a fixed reference zone.
//!
//! Stamps are rendered in Pacific time whatever the viewer's zone is, so logs
//! pasted from different machines line up.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub const REFERENCE_ZONE: Tz = chrono_tz::America::Los_Angeles;

/// Render `now` like `Oct 17, 2026, 3:04:05 PM`.
#[must_use]
pub fn format_stamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&REFERENCE_ZONE)
        .format("%b %-d, %Y, %-I:%M:%S %p")
        .to_string()
}
