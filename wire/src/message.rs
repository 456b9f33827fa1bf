//! Tagged progress messages carried by the sync event stream.
//!
//! Each event's data is one line of text. A line is classified by its prefix
//! tag in a fixed priority order and decoded once at the boundary; consumers
//! only ever match on [`SyncMessage`].
//!
//! A plain log line that happens to begin with a tag is classified as that
//! tag. The server never emits such lines, so the ambiguity is accepted.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use crate::WireError;

pub const ERROR_TAG: &str = "SYNC_ERROR:";
pub const TOTAL_TAG: &str = "PROGRESS_TOTAL:";
pub const STEP_TAG: &str = "PROGRESS_STEP:";

/// The exact line that signals successful completion.
pub const FINISHED_LINE: &str = "All done!";

/// One decoded stream message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncMessage {
    /// Server-side failure with the reported text.
    Failed(String),
    /// Declared total number of steps.
    Total(u64),
    /// Increment to add to the running step counter.
    Step(u64),
    /// Completion line; logged verbatim before the session ends.
    Finished,
    /// Any other line, shown in the log as-is.
    Line(String),
}

/// Decode one line of stream data.
///
/// # Errors
///
/// Returns [`WireError::MalformedCount`] when a progress tag is not followed
/// by a non-negative integer.
pub fn decode_message(raw: &str) -> Result<SyncMessage, WireError> {
    if let Some(text) = raw.strip_prefix(ERROR_TAG) {
        return Ok(SyncMessage::Failed(text.to_owned()));
    }
    if let Some(rest) = raw.strip_prefix(TOTAL_TAG) {
        return parse_count(TOTAL_TAG, rest).map(SyncMessage::Total);
    }
    if let Some(rest) = raw.strip_prefix(STEP_TAG) {
        return parse_count(STEP_TAG, rest).map(SyncMessage::Step);
    }
    if raw == FINISHED_LINE {
        return Ok(SyncMessage::Finished);
    }
    Ok(SyncMessage::Line(raw.to_owned()))
}

fn parse_count(tag: &'static str, rest: &str) -> Result<u64, WireError> {
    // Only the first colon-separated field counts; trailing fields are ignored.
    let field = rest.split(':').next().unwrap_or_default().trim();
    field.parse::<u64>().map_err(|_| WireError::MalformedCount {
        tag: tag.trim_end_matches(':'),
        raw: rest.to_owned(),
    })
}
