//! Category vocabulary shared by zones, cards and the reorder payload.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::WireError;

/// Category a card belongs to. Doubles as the persisted status value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Done,
    WorkingOn,
    Started,
    TodaysTodos,
    NotStarted,
    Recurring,
}

impl Status {
    /// Every status, in board column order.
    pub const ALL: [Self; 6] = [
        Self::TodaysTodos,
        Self::NotStarted,
        Self::Started,
        Self::WorkingOn,
        Self::Done,
        Self::Recurring,
    ];

    /// The `snake_case` tag used on the wire and in `data-status`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::WorkingOn => "working_on",
            Self::Started => "started",
            Self::TodaysTodos => "todays_todos",
            Self::NotStarted => "not_started",
            Self::Recurring => "recurring",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = WireError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == raw.trim())
            .ok_or_else(|| WireError::UnknownStatus(raw.to_owned()))
    }
}
