//! What the sync panel shows: mode, progress bar, log.

/// Whether the blocking sync panel replaces the main row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Blocking,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// Cumulative sum of all steps received.
    pub value: u64,
    /// Declared total, unknown until the server sends one.
    pub max: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Info,
    /// Rendered red.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    /// Position in the session's log, stable for keyed rendering.
    pub seq: usize,
    pub stamp: String,
    pub text: String,
    pub kind: LineKind,
}

impl LogLine {
    /// Text exactly as shown: `[stamp] text`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("[{}] {}", self.stamp, self.text)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == LineKind::Error
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncView {
    pub mode: Mode,
    pub progress: Progress,
    pub log: Vec<LogLine>,
}

impl SyncView {
    pub(crate) fn push(&mut self, stamp: String, text: String, kind: LineKind) {
        let seq = self.log.len();
        self.log.push(LogLine { seq, stamp, text, kind });
    }

    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.mode == Mode::Blocking
    }
}
