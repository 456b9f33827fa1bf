//! Single-flight queue for reorder submissions.
//!
//! Drops keep working while a submission is in flight; batches wait here and
//! go out one at a time in drop order, so the server applies them in the
//! order the user made them. A newer batch for a zone supersedes an unsent
//! one for the same zone (each batch is a full snapshot of its zone) and
//! moves to the back of the line.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use std::collections::VecDeque;

use wire::ReorderRequest;

#[derive(Debug, Default)]
pub struct PersistQueue {
    pending: VecDeque<ReorderRequest>,
    in_flight: bool,
}

impl PersistQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch. Returns it straight back when nothing is in flight; the
    /// caller must send it and report back through [`Self::complete`].
    pub fn enqueue(&mut self, batch: ReorderRequest) -> Option<ReorderRequest> {
        if !self.in_flight {
            self.in_flight = true;
            return Some(batch);
        }
        let zone = batch.status();
        self.pending.retain(|queued| queued.status() != zone);
        self.pending.push_back(batch);
        None
    }

    /// Mark the in-flight batch finished (either way) and hand out the next.
    pub fn complete(&mut self) -> Option<ReorderRequest> {
        let next = self.pending.pop_front();
        self.in_flight = next.is_some();
        next
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
