//! Sync stream controller.
//!
//! Drives the blocking progress/log panel from one server-push channel. The
//! [`controller::SyncController`] state machine consumes decoded
//! [`wire::SyncMessage`]s and transport failures and answers with
//! [`controller::Command`]s; the browser client and the CLI each carry those
//! out against their own channel and UI.

pub mod controller;
pub mod timestamp;
pub mod view;

pub use controller::{Command, Exit, Phase, SyncController};
pub use view::{LineKind, LogLine, Mode, Progress, SyncView};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("a sync session is already running")]
    AlreadyActive,
    #[error(transparent)]
    Wire(#[from] wire::WireError),
}
