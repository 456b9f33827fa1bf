//! FLIP (first, last, invert, play) planning for list reflow.
//!
//! The engine records every card's rectangle before the DOM move, then asks
//! for the rectangles again afterward. Each card that moved gets an instant
//! inverse transform so it still appears where it was, and on the next frame
//! a transition carries it home. Cards that did not move are left alone.

#[cfg(test)]
#[path = "flip_test.rs"]
mod flip_test;

use crate::geometry::{Offset, Rect};

/// Transition settings for the "play" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipTiming {
    pub duration_ms: u32,
    pub easing: &'static str,
}

impl Default for FlipTiming {
    fn default() -> Self {
        Self { duration_ms: 250, easing: "ease" }
    }
}

impl FlipTiming {
    /// `transition` value for the play step.
    #[must_use]
    pub fn transition(&self) -> String {
        format!("transform {}ms {}", self.duration_ms, self.easing)
    }
}

/// `transition` value that makes the invert step take effect immediately.
pub const INSTANT_TRANSITION: &str = "transform 0s";

/// One card to animate back from `offset` to identity.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipMove<N> {
    pub node: N,
    pub offset: Offset,
}

impl<N> FlipMove<N> {
    /// `transform` value for the invert step.
    #[must_use]
    pub fn invert_transform(&self) -> String {
        format!("translate({}px,{}px)", self.offset.dx, self.offset.dy)
    }
}

/// Compare first rectangles against current ones and keep the cards that moved.
///
/// Nodes for which `last_of` has no rectangle (detached meanwhile) are skipped.
pub fn plan_flip<N, F>(first: &[(N, Rect)], mut last_of: F) -> Vec<FlipMove<N>>
where
    N: Clone,
    F: FnMut(&N) -> Option<Rect>,
{
    first
        .iter()
        .filter_map(|(node, before)| {
            let offset = last_of(node)?.offset_to(before);
            if offset.is_zero() {
                None
            } else {
                Some(FlipMove { node: node.clone(), offset })
            }
        })
        .collect()
}
