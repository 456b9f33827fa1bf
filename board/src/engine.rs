//! Reorder engine: drag lifecycle, drop placement, restyle, FLIP, batch.
//!
//! The engine owns the drag session and drives a [`Surface`]. It never talks
//! to the network; a successful drop returns the batch to persist and the
//! host decides how to send it.
//!
//! ERROR HANDLING
//! ==============
//! The DOM move is optimistic and always applied. Drop errors only describe
//! drops that were ignored (no active drag, unknown zone) so the host can log
//! them.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wire::{ReorderRequest, Status};

use crate::flip::{FlipTiming, plan_flip};
use crate::geometry::{Point, Rect};
use crate::placement::{Placement, find_list_child, resolve_placement};
use crate::session::DragSession;
use crate::style::header_style;
use crate::surface::Surface;

/// Why a drop did nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("drop without an active drag")]
    NoActiveDrag,
    #[error("no list rendered for zone {0}")]
    MissingZone(Status),
}

/// Result of an applied drop.
#[derive(Debug, Clone, PartialEq)]
pub struct DropOutcome {
    /// Id of the moved card, when it carries one.
    pub card_id: Option<String>,
    pub zone: Status,
    /// Index of the moved card in the destination list.
    pub index: Option<usize>,
    /// Number of cards that received a FLIP animation.
    pub animated: usize,
    /// Full ordered membership of the destination zone.
    pub batch: ReorderRequest,
}

pub struct ReorderEngine<S: Surface> {
    surface: S,
    session: DragSession<S::Node>,
    timing: FlipTiming,
}

impl<S: Surface> ReorderEngine<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_timing(surface, FlipTiming::default())
    }

    #[must_use]
    pub fn with_timing(surface: S, timing: FlipTiming) -> Self {
        Self { surface, session: DragSession::Idle, timing }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn session(&self) -> &DragSession<S::Node> {
        &self.session
    }

    pub fn drag_start(&mut self, card: S::Node) {
        self.session.start(card);
    }

    /// Every zone accepts every card.
    pub fn drag_over(&mut self, zone: Status) -> bool {
        self.surface.set_hover(zone, true);
        true
    }

    pub fn drag_leave(&mut self, zone: Status) {
        self.surface.set_hover(zone, false);
    }

    /// Gesture ended without (or after) a drop.
    pub fn drag_end(&mut self) {
        self.session.finish();
    }

    /// Drop the dragged card into `zone` at `pointer`.
    ///
    /// # Errors
    ///
    /// Returns [`DropError::NoActiveDrag`] when nothing is being dragged and
    /// [`DropError::MissingZone`] when `zone` has no list. The session is
    /// cleared in both cases.
    pub fn drop(&mut self, zone: Status, pointer: Point) -> Result<DropOutcome, DropError> {
        self.surface.set_hover(zone, false);
        let card = self.session.finish().ok_or(DropError::NoActiveDrag)?;
        let list = self.surface.zone_list(zone).ok_or(DropError::MissingZone(zone))?;

        // First.
        let first = self
            .surface
            .cards(&list)
            .into_iter()
            .filter_map(|node| self.surface.rect(&node).map(|rect| (node, rect)))
            .collect::<Vec<(S::Node, Rect)>>();

        let hit = self.surface.node_at(pointer, &card);
        let reference = find_list_child(hit, &list, |node| self.surface.parent(node))
            .and_then(|node| self.surface.rect(&node).map(|rect| (node, rect)));
        let placement: Placement<S::Node> = resolve_placement(reference, &card, pointer.y);

        self.surface.insert(&list, &card, &placement);
        self.surface.restyle_header(&card, header_style(zone));

        // Last, invert, play.
        let moves = plan_flip(&first, |node| self.surface.rect(node));
        for step in &moves {
            self.surface.animate(step, self.timing);
        }

        let order = self.surface.cards(&list);
        let index = order.iter().position(|node| *node == card);
        let ids = order.iter().filter_map(|node| self.surface.card_id(node)).collect::<Vec<_>>();

        Ok(DropOutcome {
            card_id: self.surface.card_id(&card),
            zone,
            index,
            animated: moves.len(),
            batch: ReorderRequest::from_order(zone, ids),
        })
    }
}
