//! Drop-point resolution.
//!
//! The element under the pointer is usually something inside a card (a
//! header, a badge, text). Walking up to the direct child of the destination
//! list gives the reference card; the pointer's side of that card's vertical
//! midpoint decides before/after. Anything that never reaches the list means
//! "append".

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::geometry::Rect;

/// Where a dropped card goes inside the destination list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement<N> {
    Before(N),
    After(N),
    Append,
}

/// Walk from `hit` up through `parent_of` until reaching a node whose parent
/// is `list`. Returns `None` when the walk runs off the tree, including when
/// `hit` is the list itself.
pub fn find_list_child<N, F>(hit: Option<N>, list: &N, mut parent_of: F) -> Option<N>
where
    N: PartialEq,
    F: FnMut(&N) -> Option<N>,
{
    let mut current = hit;
    while let Some(node) = current {
        let parent = parent_of(&node);
        if parent.as_ref() == Some(list) {
            return Some(node);
        }
        current = parent;
    }
    None
}

/// Decide the placement relative to the resolved reference.
///
/// A reference equal to the dragged card cannot anchor anything and falls
/// back to appending.
pub fn resolve_placement<N: PartialEq>(reference: Option<(N, Rect)>, dragged: &N, pointer_y: f64) -> Placement<N> {
    match reference {
        Some((node, rect)) if node != *dragged => {
            if pointer_y < rect.mid_y() {
                Placement::Before(node)
            } else {
                Placement::After(node)
            }
        }
        _ => Placement::Append,
    }
}
