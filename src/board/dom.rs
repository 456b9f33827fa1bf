//! [`Surface`] over the server-rendered board markup.
//!
//! The page renders one `.dropzone[data-status]` per category, each holding a
//! `.todo-list` of `.draggable-item[data-id]` cards with a `.card-header`.
//! Nodes are plain `web_sys::Element`s; identity is DOM identity.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls that fail (detached nodes, a missing header) are logged and
//! skipped. A half-applied drop still leaves every card inside some list.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use wire::Status;

pub const ZONE_SELECTOR: &str = ".dropzone";
pub const LIST_SELECTOR: &str = ".todo-list";
pub const CARD_CLASS: &str = "draggable-item";
pub const PLACEHOLDER_SELECTOR: &str = ".placeholder";
pub const DRAG_OVER_CLASS: &str = "drag-over";
pub const STATUS_ATTR: &str = "data-status";
pub const ID_ATTR: &str = "data-id";

/// Selector for every card; the surface recognises cards by the same class.
#[must_use]
pub fn card_selector() -> String {
    format!(".{CARD_CLASS}")
}

/// Selector for the zone that renders `status`.
#[must_use]
pub fn zone_selector(status: Status) -> String {
    format!("{ZONE_SELECTOR}[{STATUS_ATTR}=\"{status}\"]")
}

/// Status of a zone from its `data-status` attribute.
pub fn zone_status(attr: Option<String>) -> Option<Status> {
    attr?.parse().ok()
}

#[cfg(feature = "hydrate")]
pub use browser::DomSurface;

#[cfg(feature = "hydrate")]
mod browser {
    use board::flip::{FlipMove, FlipTiming, INSTANT_TRANSITION};
    use board::placement::Placement;
    use board::style::{HEADER_SELECTOR, HeaderStyle, STALE_HEADER_CLASSES};
    use board::{Point, Rect, Surface};
    use leptos::logging::warn;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, HtmlElement};
    use wire::Status;

    use super::{CARD_CLASS, ID_ATTR, LIST_SELECTOR, PLACEHOLDER_SELECTOR, DRAG_OVER_CLASS, zone_selector};

    pub struct DomSurface {
        document: Document,
    }

    impl DomSurface {
        pub fn new(document: Document) -> Self {
            Self { document }
        }

        pub fn zone(&self, status: Status) -> Option<Element> {
            self.document.query_selector(&zone_selector(status)).ok().flatten()
        }
    }

    fn remove_placeholder(list: &Element) {
        if let Ok(Some(placeholder)) = list.query_selector(PLACEHOLDER_SELECTOR) {
            placeholder.remove();
        }
    }

    impl Surface for DomSurface {
        type Node = Element;

        fn zone_list(&self, zone: Status) -> Option<Element> {
            self.zone(zone)?.query_selector(LIST_SELECTOR).ok().flatten()
        }

        fn cards(&self, list: &Element) -> Vec<Element> {
            let children = list.children();
            (0..children.length())
                .filter_map(|i| children.item(i))
                .filter(|el| el.class_list().contains(CARD_CLASS))
                .collect()
        }

        fn card_id(&self, card: &Element) -> Option<String> {
            card.get_attribute(ID_ATTR)
        }

        fn rect(&self, node: &Element) -> Option<Rect> {
            let r = node.get_bounding_client_rect();
            Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
        }

        #[allow(clippy::cast_possible_truncation)]
        fn node_at(&self, point: Point, hidden: &Element) -> Option<Element> {
            let Some(style) = hidden.dyn_ref::<HtmlElement>().map(HtmlElement::style) else {
                return self.document.element_from_point(point.x as f32, point.y as f32);
            };
            let previous = style.get_property_value("display").unwrap_or_default();
            let _ = style.set_property("display", "none");
            let hit = self.document.element_from_point(point.x as f32, point.y as f32);
            let _ = style.set_property("display", &previous);
            hit
        }

        fn parent(&self, node: &Element) -> Option<Element> {
            node.parent_element()
        }

        fn insert(&mut self, list: &Element, card: &Element, placement: &Placement<Element>) {
            remove_placeholder(list);
            let attached = |node: &Element| node.parent_element().as_ref() == Some(list);
            let result = match placement {
                Placement::Before(reference) if attached(reference) => list.insert_before(card, Some(reference.as_ref())),
                Placement::After(reference) if attached(reference) => {
                    list.insert_before(card, reference.next_sibling().as_ref())
                }
                _ => list.append_child(card),
            };
            if let Err(err) = result {
                warn!("card move failed: {err:?}");
            }
        }

        fn restyle_header(&mut self, card: &Element, style: HeaderStyle) {
            let Ok(Some(header)) = card.query_selector(HEADER_SELECTOR) else {
                warn!("card {:?} has no header to restyle", card.get_attribute(ID_ATTR));
                return;
            };
            let classes = header.class_list();
            for stale in STALE_HEADER_CLASSES {
                let _ = classes.remove_1(stale);
            }
            let [background, text] = style.classes();
            let _ = classes.add_2(background, text);
        }

        fn set_hover(&mut self, zone: Status, hovered: bool) {
            if let Some(zone) = self.zone(zone) {
                let _ = zone.class_list().toggle_with_force(DRAG_OVER_CLASS, hovered);
            }
        }

        fn animate(&mut self, step: &FlipMove<Element>, timing: FlipTiming) {
            let Some(el) = step.node.dyn_ref::<HtmlElement>() else {
                return;
            };
            let style = el.style();
            let _ = style.set_property("transform", &step.invert_transform());
            let _ = style.set_property("transition", INSTANT_TRANSITION);

            let play_style = style.clone();
            let transition = timing.transition();
            let play = Closure::once_into_js(move || {
                let _ = play_style.set_property("transition", &transition);
                let _ = play_style.set_property("transform", "");
            });
            let scheduled = web_sys::window().map(|w| w.request_animation_frame(play.unchecked_ref()));
            if !matches!(scheduled, Some(Ok(_))) {
                // No frame callback available; jump to the end state.
                let _ = style.set_property("transition", "");
                let _ = style.set_property("transform", "");
            }
        }
    }
}
