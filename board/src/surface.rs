//! The seam between the reorder engine and whatever renders the board.
//!
//! The browser implements this over `web_sys::Element`; tests use
//! [`crate::memory::MemorySurface`]. Every method is a single query or a
//! single mutation so the drop algorithm itself lives in the engine.

use wire::Status;

use crate::flip::{FlipMove, FlipTiming};
use crate::geometry::{Point, Rect};
use crate::placement::Placement;
use crate::style::HeaderStyle;

pub trait Surface {
    /// Handle to one node of the rendered tree.
    type Node: Clone + PartialEq + std::fmt::Debug;

    /// The list element that holds `zone`'s cards.
    fn zone_list(&self, zone: Status) -> Option<Self::Node>;

    /// Draggable cards directly inside `list`, in display order.
    fn cards(&self, list: &Self::Node) -> Vec<Self::Node>;

    /// The card's persisted identifier.
    fn card_id(&self, card: &Self::Node) -> Option<String>;

    /// Current bounding rectangle.
    fn rect(&self, node: &Self::Node) -> Option<Rect>;

    /// Topmost node under `point` with `hidden` taken out of layout for the
    /// duration of the query.
    fn node_at(&self, point: Point, hidden: &Self::Node) -> Option<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Move `card` into `list` at `placement`. A single move, never a rebuild.
    fn insert(&mut self, list: &Self::Node, card: &Self::Node, placement: &Placement<Self::Node>);

    /// Replace the header's status classes with `style`.
    fn restyle_header(&mut self, card: &Self::Node, style: HeaderStyle);

    /// Toggle the transient drag-over cue on a zone.
    fn set_hover(&mut self, zone: Status, hovered: bool);

    /// Apply the inverse transform now and schedule the play step.
    fn animate(&mut self, step: &FlipMove<Self::Node>, timing: FlipTiming);
}
