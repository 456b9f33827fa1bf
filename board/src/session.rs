//! Drag session state machine: `Idle -> Dragging -> Idle`.
//!
//! The session is the only place a dragged card is remembered. Both drop and
//! drag-end take it back out, so nothing outlives the gesture.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSession<N> {
    Idle,
    Dragging(N),
}

impl<N> Default for DragSession<N> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<N> DragSession<N> {
    /// Begin dragging `card`. A stale session from a gesture whose end was
    /// never reported is replaced.
    pub fn start(&mut self, card: N) {
        *self = Self::Dragging(card);
    }

    /// End the gesture, returning the dragged card if there was one.
    pub fn finish(&mut self) -> Option<N> {
        match std::mem::take(self) {
            Self::Dragging(card) => Some(card),
            Self::Idle => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
