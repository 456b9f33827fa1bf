//! Headless [`Surface`] with a deterministic column layout.
//!
//! Zones sit side by side in fixed-width columns. Each column has a title
//! strip, then its list with cards stacked top to bottom. Every card has a
//! header strip at its top so hit tests land on nested nodes the way they do
//! in a browser.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::{HashMap, HashSet};

use wire::Status;

use crate::flip::{FlipMove, FlipTiming};
use crate::geometry::{Offset, Point, Rect};
use crate::placement::Placement;
use crate::style::HeaderStyle;
use crate::surface::Surface;

pub const COLUMN_WIDTH: f64 = 240.0;
pub const COLUMN_PADDING: f64 = 10.0;
pub const COLUMN_HEIGHT: f64 = 1200.0;
pub const LIST_TOP: f64 = 48.0;
pub const CARD_GAP: f64 = 8.0;
pub const CARD_HEIGHT: f64 = 60.0;
pub const HEADER_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemoryNode {
    Zone(Status),
    List(Status),
    Card(String),
    Header(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedAnimation {
    pub card: String,
    pub offset: Offset,
    pub timing: FlipTiming,
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    zones: Vec<(Status, Vec<String>)>,
    heights: HashMap<String, f64>,
    headers: HashMap<String, HeaderStyle>,
    hovered: HashSet<Status>,
    animations: Vec<RecordedAnimation>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column for `status` holding `ids` top to bottom.
    #[must_use]
    pub fn with_zone(mut self, status: Status, ids: &[&str]) -> Self {
        self.zones.push((status, ids.iter().map(|id| (*id).to_owned()).collect()));
        self
    }

    #[must_use]
    pub fn with_card_height(mut self, id: &str, height: f64) -> Self {
        self.heights.insert(id.to_owned(), height);
        self
    }

    /// Card ids of `status` in display order.
    #[must_use]
    pub fn order(&self, status: Status) -> Vec<&str> {
        self.zones
            .iter()
            .find(|(zone, _)| *zone == status)
            .map(|(_, ids)| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn header(&self, id: &str) -> Option<HeaderStyle> {
        self.headers.get(id).copied()
    }

    #[must_use]
    pub fn is_hovered(&self, status: Status) -> bool {
        self.hovered.contains(&status)
    }

    #[must_use]
    pub fn animations(&self) -> &[RecordedAnimation] {
        &self.animations
    }

    #[must_use]
    pub fn card_rect(&self, id: &str) -> Option<Rect> {
        self.layout(None).remove(id)
    }

    fn column(&self, status: Status) -> Option<usize> {
        self.zones.iter().position(|(zone, _)| *zone == status)
    }

    #[allow(clippy::cast_precision_loss)]
    fn column_left(index: usize) -> f64 {
        index as f64 * COLUMN_WIDTH
    }

    fn layout(&self, hidden: Option<&str>) -> HashMap<String, Rect> {
        let mut rects = HashMap::new();
        for (index, (_, ids)) in self.zones.iter().enumerate() {
            let left = Self::column_left(index) + COLUMN_PADDING;
            let mut top = LIST_TOP;
            for id in ids.iter().filter(|id| Some(id.as_str()) != hidden) {
                let height = self.heights.get(id).copied().unwrap_or(CARD_HEIGHT);
                rects.insert(id.clone(), Rect::new(left, top, COLUMN_WIDTH - 2.0 * COLUMN_PADDING, height));
                top += height + CARD_GAP;
            }
        }
        rects
    }

    fn zone_of(&self, id: &str) -> Option<Status> {
        self.zones
            .iter()
            .find(|(_, ids)| ids.iter().any(|card| card == id))
            .map(|(zone, _)| *zone)
    }
}

impl Surface for MemorySurface {
    type Node = MemoryNode;

    fn zone_list(&self, zone: Status) -> Option<MemoryNode> {
        self.column(zone).map(|_| MemoryNode::List(zone))
    }

    fn cards(&self, list: &MemoryNode) -> Vec<MemoryNode> {
        match list {
            MemoryNode::List(status) => self
                .order(*status)
                .into_iter()
                .map(|id| MemoryNode::Card(id.to_owned()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn card_id(&self, card: &MemoryNode) -> Option<String> {
        match card {
            MemoryNode::Card(id) => Some(id.clone()),
            _ => None,
        }
    }

    fn rect(&self, node: &MemoryNode) -> Option<Rect> {
        match node {
            MemoryNode::Zone(status) => {
                let left = Self::column_left(self.column(*status)?);
                Some(Rect::new(left, 0.0, COLUMN_WIDTH, COLUMN_HEIGHT))
            }
            MemoryNode::List(status) => {
                let left = Self::column_left(self.column(*status)?);
                Some(Rect::new(left, LIST_TOP, COLUMN_WIDTH, COLUMN_HEIGHT - LIST_TOP))
            }
            MemoryNode::Card(id) => self.card_rect(id),
            MemoryNode::Header(id) => self
                .card_rect(id)
                .map(|rect| Rect { height: HEADER_HEIGHT, ..rect }),
        }
    }

    fn node_at(&self, point: Point, hidden: &MemoryNode) -> Option<MemoryNode> {
        let hidden_id = match hidden {
            MemoryNode::Card(id) => Some(id.as_str()),
            _ => None,
        };
        let (status, _) = self.zones.iter().enumerate().find_map(|(index, zone)| {
            let column = Rect::new(Self::column_left(index), 0.0, COLUMN_WIDTH, COLUMN_HEIGHT);
            column.contains(point).then_some(zone)
        })?;
        if point.y < LIST_TOP {
            return Some(MemoryNode::Zone(*status));
        }
        let layout = self.layout(hidden_id);
        let hit = self
            .order(*status)
            .into_iter()
            .find(|id| layout.get(*id).is_some_and(|rect| rect.contains(point)));
        Some(match hit {
            Some(id) if point.y < layout.get(id).map_or(0.0, |rect| rect.top) + HEADER_HEIGHT => {
                MemoryNode::Header(id.to_owned())
            }
            Some(id) => MemoryNode::Card(id.to_owned()),
            None => MemoryNode::List(*status),
        })
    }

    fn parent(&self, node: &MemoryNode) -> Option<MemoryNode> {
        match node {
            MemoryNode::Header(id) => Some(MemoryNode::Card(id.clone())),
            MemoryNode::Card(id) => self.zone_of(id).map(MemoryNode::List),
            MemoryNode::List(status) => Some(MemoryNode::Zone(*status)),
            MemoryNode::Zone(_) => None,
        }
    }

    fn insert(&mut self, list: &MemoryNode, card: &MemoryNode, placement: &Placement<MemoryNode>) {
        let (MemoryNode::List(target), MemoryNode::Card(id)) = (list, card) else {
            return;
        };
        for (_, ids) in &mut self.zones {
            ids.retain(|existing| existing != id);
        }
        let Some(column) = self.column(*target) else {
            return;
        };
        let ids = &mut self.zones[column].1;
        let index = match placement {
            Placement::Before(MemoryNode::Card(reference)) => ids.iter().position(|x| x == reference),
            Placement::After(MemoryNode::Card(reference)) => {
                ids.iter().position(|x| x == reference).map(|i| i + 1)
            }
            _ => None,
        }
        .unwrap_or(ids.len());
        ids.insert(index, id.clone());
    }

    fn restyle_header(&mut self, card: &MemoryNode, style: HeaderStyle) {
        if let MemoryNode::Card(id) = card {
            self.headers.insert(id.clone(), style);
        }
    }

    fn set_hover(&mut self, zone: Status, hovered: bool) {
        if hovered {
            self.hovered.insert(zone);
        } else {
            self.hovered.remove(&zone);
        }
    }

    fn animate(&mut self, step: &FlipMove<MemoryNode>, timing: FlipTiming) {
        if let MemoryNode::Card(id) = &step.node {
            self.animations.push(RecordedAnimation { card: id.clone(), offset: step.offset, timing });
        }
    }
}
