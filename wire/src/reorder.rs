//! Payload for `POST /work_status/reorder`.
//!
//! A batch always carries the full ordered membership of one zone so the
//! server can overwrite positions wholesale; positions are the list indices.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

use serde::{Deserialize, Serialize};

use crate::Status;

/// One card's persisted placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub id: String,
    pub status: Status,
    pub position: usize,
}

/// Request body for the reorder endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub positions: Vec<PositionEntry>,
}

impl ReorderRequest {
    /// Build a batch from a zone's card ids in display order.
    pub fn from_order<I, S>(status: Status, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let positions = ids
            .into_iter()
            .enumerate()
            .map(|(position, id)| PositionEntry { id: id.into(), status, position })
            .collect();
        Self { positions }
    }

    /// Zone this batch describes, or `None` for an empty batch.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.positions.first().map(|entry| entry.status)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Card ids in position order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.positions.iter().map(|entry| entry.id.as_str())
    }
}
