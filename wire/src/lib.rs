//! Shared wire formats for the task board client.
//!
//! This crate owns every byte that crosses the network boundary so the browser
//! client and the native CLI agree on one representation:
//!
//! | Module | Role |
//! |--------|------|
//! | [`status`] | The closed category vocabulary (`done`, `working_on`, ...) |
//! | [`reorder`] | `POST /work_status/reorder` payload |
//! | [`message`] | Tagged sync progress messages carried in the event stream |
//! | [`event_stream`] | Incremental `text/event-stream` frame decoder |

pub mod event_stream;
pub mod message;
pub mod reorder;
pub mod status;

pub use event_stream::EventStreamDecoder;
pub use message::{FINISHED_LINE, SyncMessage, decode_message};
pub use reorder::{PositionEntry, ReorderRequest};
pub use status::Status;

/// Error returned when inbound wire data cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A status tag outside the known vocabulary.
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    /// A `PROGRESS_TOTAL:` / `PROGRESS_STEP:` message without a usable count.
    #[error("malformed {tag} count: {raw:?}")]
    MalformedCount { tag: &'static str, raw: String },
}
