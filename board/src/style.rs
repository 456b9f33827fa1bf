//! Card header styling per status.
//!
//! Headers carry one Bootstrap background class and one text-contrast class.
//! `not_started` uses a light background, so it is the only dark-text status.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use wire::Status;

/// Every class a header may carry from a previous status; all are stripped
/// before the new pair is applied.
pub const STALE_HEADER_CLASSES: [&str; 9] = [
    "bg-info",
    "bg-warning",
    "bg-secondary",
    "bg-light",
    "text-white",
    "text-dark",
    "bg-purple",
    "bg-success",
    "bg-primary",
];

/// Selector for the element restyled inside a card.
pub const HEADER_SELECTOR: &str = ".card-header";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub text: &'static str,
}

impl HeaderStyle {
    #[must_use]
    pub fn classes(&self) -> [&'static str; 2] {
        [self.background, self.text]
    }
}

/// Bootstrap background and text classes for a card header in `status`.
#[must_use]
pub fn header_style(status: Status) -> HeaderStyle {
    let background = match status {
        Status::Done => "bg-success",
        Status::WorkingOn => "bg-info",
        Status::Started => "bg-warning",
        Status::TodaysTodos => "bg-purple",
        Status::NotStarted => "bg-secondary",
        Status::Recurring => "bg-primary",
    };
    let text = if status == Status::NotStarted { "text-dark" } else { "text-white" };
    HeaderStyle { background, text }
}
