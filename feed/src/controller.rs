//! Sync session state machine.
//!
//! The controller never touches a channel, a timer or the DOM. Each input
//! returns the commands the host must carry out, in order; the host owns the
//! `EventSource` (browser) or HTTP body stream (CLI).
//!
//! | from | event | to | commands |
//! |------|-------|----|----------|
//! | Idle | start | Streaming | `ShowBlocking`, `OpenChannel` |
//! | Streaming | total / step | Streaming | none |
//! | Streaming | line | Streaming | `ScrollLog` |
//! | Streaming | failed | Idle | `CloseChannel`, `ScrollLog`, `RestoreUi` |
//! | Streaming | finished | Finishing | `CloseChannel`, `ScrollLog`, `ScheduleRestore` |
//! | Streaming | transport error | Idle | `CloseChannel`, `ScrollLog`, `RestoreUi` |
//! | Finishing | restore timer | Idle | `RestoreUi`, `ReloadPage` |
//!
//! Every other pairing is ignored, which is what keeps late messages from
//! being processed after a terminal transition.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use chrono::{DateTime, Utc};
use wire::{FINISHED_LINE, SyncMessage, decode_message};

use crate::FeedError;
use crate::timestamp::format_stamp;
use crate::view::{LineKind, Mode, Progress, SyncView};

/// Pause between the completion line and the reload.
pub const RELOAD_DELAY: Duration = Duration::from_millis(500);

/// Shown when the channel fails below the message protocol.
pub const NETWORK_ERROR_TEXT: &str = "Network error during sync.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Streaming,
    /// Completion received; waiting out the reload delay.
    Finishing,
}

/// How the last session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// Server sent `SYNC_ERROR`.
    Failed,
    /// The channel broke or ended early.
    Disconnected,
    /// Server sent the completion line and the reload was requested.
    Completed,
}

/// Side effects for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Hide the main row and show the sync container.
    ShowBlocking,
    OpenChannel,
    CloseChannel,
    ScrollLog,
    /// Call [`SyncController::on_restore_timer`] after this delay.
    ScheduleRestore(Duration),
    /// Hide the sync container and show the main row.
    RestoreUi,
    ReloadPage,
}

enum Event {
    Start,
    Message(SyncMessage),
    TransportError,
    RestoreTimer,
}

#[derive(Debug)]
pub struct SyncController {
    phase: Phase,
    view: SyncView,
    exit: Option<Exit>,
    reload_delay: Duration,
}

impl Default for SyncController {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncController {
    #[must_use]
    pub fn new() -> Self {
        Self::with_reload_delay(RELOAD_DELAY)
    }

    #[must_use]
    pub fn with_reload_delay(reload_delay: Duration) -> Self {
        Self { phase: Phase::Idle, view: SyncView::default(), exit: None, reload_delay }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn view(&self) -> &SyncView {
        &self.view
    }

    #[must_use]
    pub fn exit(&self) -> Option<Exit> {
        self.exit
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Begin a session: reset the view and open the channel.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::AlreadyActive`] while a session is streaming or
    /// finishing.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<Vec<Command>, FeedError> {
        if self.is_active() {
            return Err(FeedError::AlreadyActive);
        }
        Ok(self.step(Event::Start, now))
    }

    /// Decode and apply one line of stream data.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Wire`] for a malformed progress count; the
    /// message is dropped and the session is unaffected.
    pub fn on_data(&mut self, raw: &str, now: DateTime<Utc>) -> Result<Vec<Command>, FeedError> {
        let message = decode_message(raw)?;
        Ok(self.on_message(message, now))
    }

    pub fn on_message(&mut self, message: SyncMessage, now: DateTime<Utc>) -> Vec<Command> {
        self.step(Event::Message(message), now)
    }

    /// The channel failed (or ended) without a terminal message.
    pub fn on_transport_error(&mut self, now: DateTime<Utc>) -> Vec<Command> {
        self.step(Event::TransportError, now)
    }

    /// The delay requested by [`Command::ScheduleRestore`] elapsed.
    pub fn on_restore_timer(&mut self, now: DateTime<Utc>) -> Vec<Command> {
        self.step(Event::RestoreTimer, now)
    }

    fn step(&mut self, event: Event, now: DateTime<Utc>) -> Vec<Command> {
        match (self.phase, event) {
            (Phase::Idle, Event::Start) => {
                self.phase = Phase::Streaming;
                self.exit = None;
                self.view = SyncView { mode: Mode::Blocking, progress: Progress::default(), log: Vec::new() };
                vec![Command::ShowBlocking, Command::OpenChannel]
            }
            (Phase::Streaming, Event::Message(message)) => self.apply(message, now),
            (Phase::Streaming, Event::TransportError) => {
                self.log(now, NETWORK_ERROR_TEXT.to_owned(), LineKind::Error);
                self.finish(Exit::Disconnected);
                vec![Command::CloseChannel, Command::ScrollLog, Command::RestoreUi]
            }
            (Phase::Finishing, Event::RestoreTimer) => {
                self.finish(Exit::Completed);
                vec![Command::RestoreUi, Command::ReloadPage]
            }
            _ => Vec::new(),
        }
    }

    fn apply(&mut self, message: SyncMessage, now: DateTime<Utc>) -> Vec<Command> {
        match message {
            SyncMessage::Failed(text) => {
                self.log(now, format!("Sync failed: {text}"), LineKind::Error);
                self.finish(Exit::Failed);
                vec![Command::CloseChannel, Command::ScrollLog, Command::RestoreUi]
            }
            SyncMessage::Total(total) => {
                self.view.progress.max = Some(total);
                Vec::new()
            }
            SyncMessage::Step(step) => {
                self.view.progress.value = self.view.progress.value.saturating_add(step);
                Vec::new()
            }
            SyncMessage::Finished => {
                self.log(now, FINISHED_LINE.to_owned(), LineKind::Info);
                self.phase = Phase::Finishing;
                vec![Command::CloseChannel, Command::ScrollLog, Command::ScheduleRestore(self.reload_delay)]
            }
            SyncMessage::Line(text) => {
                self.log(now, text, LineKind::Info);
                vec![Command::ScrollLog]
            }
        }
    }

    fn log(&mut self, now: DateTime<Utc>, text: String, kind: LineKind) {
        self.view.push(format_stamp(now), text, kind);
    }

    fn finish(&mut self, exit: Exit) {
        self.phase = Phase::Idle;
        self.view.mode = Mode::Idle;
        self.exit = Some(exit);
    }
}
