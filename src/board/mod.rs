//! Drag-and-drop reordering on the rendered board.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` adapts the page to [`board::Surface`]; this module binds the native
//! drag events to one [`board::ReorderEngine`] and sends every drop's batch
//! through a single-flight [`board::PersistQueue`].
//!
//! The engine and queue live in `Rc<RefCell<_>>` shared only by the
//! listeners installed here.

pub mod dom;

#[cfg(feature = "hydrate")]
pub use browser::{BoardBindings, install};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use board::{DropError, PersistQueue, Point, ReorderEngine};
    use gloo_events::{EventListener, EventListenerOptions};
    use leptos::logging::{error, log, warn};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, DragEvent, Element, Event};
    use wire::{ReorderRequest, Status};

    use super::dom::{DomSurface, STATUS_ATTR, ZONE_SELECTOR, card_selector, zone_status};
    use crate::config::ClientConfig;
    use crate::net::api::{describe_batch, submit_reorder};

    type Engine = Rc<RefCell<ReorderEngine<DomSurface>>>;

    /// Listeners for every card and zone on the page. Dropping this removes
    /// them.
    pub struct BoardBindings {
        listeners: Vec<EventListener>,
    }

    impl BoardBindings {
        #[must_use]
        pub fn len(&self) -> usize {
            self.listeners.len()
        }

        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.listeners.is_empty()
        }

        /// Keep the listeners for the lifetime of the page.
        pub fn forget(self) {
            for listener in self.listeners {
                listener.forget();
            }
        }
    }

    fn select_all(document: &Document, selector: &str) -> Vec<Element> {
        let Ok(nodes) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Make every card draggable and every zone a drop target.
    pub fn install(document: &Document, config: &ClientConfig) -> BoardBindings {
        let engine: Engine = Rc::new(RefCell::new(ReorderEngine::with_timing(
            DomSurface::new(document.clone()),
            config.flip,
        )));
        let queue = Rc::new(RefCell::new(PersistQueue::new()));
        let reorder_url: Rc<str> = Rc::from(config.reorder_url.as_str());

        let mut listeners = Vec::new();
        for card in select_all(document, &card_selector()) {
            bind_card(&engine, card, &mut listeners);
        }
        for zone in select_all(document, ZONE_SELECTOR) {
            let Some(status) = zone_status(zone.get_attribute(STATUS_ATTR)) else {
                warn!("dropzone without a known {STATUS_ATTR}; skipped");
                continue;
            };
            bind_zone(&engine, &queue, &reorder_url, &zone, status, &mut listeners);
        }
        BoardBindings { listeners }
    }

    fn bind_card(engine: &Engine, card: Element, listeners: &mut Vec<EventListener>) {
        let _ = card.set_attribute("draggable", "true");

        let start_engine = Rc::clone(engine);
        let dragged = card.clone();
        listeners.push(EventListener::new(&card, "dragstart", move |event: &Event| {
            if let Some(transfer) = event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer) {
                transfer.set_effect_allowed("move");
                // Firefox will not start a drag without data.
                let _ = transfer.set_data("text/plain", "");
            }
            start_engine.borrow_mut().drag_start(dragged.clone());
        }));

        let end_engine = Rc::clone(engine);
        listeners.push(EventListener::new(&card, "dragend", move |_event: &Event| {
            end_engine.borrow_mut().drag_end();
        }));
    }

    fn bind_zone(
        engine: &Engine,
        queue: &Rc<RefCell<PersistQueue>>,
        reorder_url: &Rc<str>,
        zone: &Element,
        status: Status,
        listeners: &mut Vec<EventListener>,
    ) {
        let over_engine = Rc::clone(engine);
        listeners.push(EventListener::new_with_options(
            zone,
            "dragover",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                if over_engine.borrow_mut().drag_over(status) {
                    event.prevent_default();
                    if let Some(transfer) = event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer) {
                        transfer.set_drop_effect("move");
                    }
                }
            },
        ));

        let leave_engine = Rc::clone(engine);
        listeners.push(EventListener::new(zone, "dragleave", move |_event: &Event| {
            leave_engine.borrow_mut().drag_leave(status);
        }));

        let drop_engine = Rc::clone(engine);
        let queue = Rc::clone(queue);
        let url = Rc::clone(reorder_url);
        listeners.push(EventListener::new_with_options(
            zone,
            "drop",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                let Some(drag) = event.dyn_ref::<DragEvent>() else {
                    return;
                };
                let pointer = Point::new(f64::from(drag.client_x()), f64::from(drag.client_y()));
                let outcome = drop_engine.borrow_mut().drop(status, pointer);
                match outcome {
                    Ok(outcome) => {
                        log!(
                            "moved card {} to {} at {:?}; {} animated",
                            outcome.card_id.as_deref().unwrap_or("?"),
                            outcome.zone,
                            outcome.index,
                            outcome.animated
                        );
                        persist(&queue, &url, outcome.batch);
                    }
                    Err(DropError::NoActiveDrag) => {}
                    Err(err) => warn!("drop ignored: {err}"),
                }
            },
        ));
    }

    /// Hand a batch to the queue and, if nothing is in flight, start draining.
    fn persist(queue: &Rc<RefCell<PersistQueue>>, url: &Rc<str>, batch: ReorderRequest) {
        if batch.is_empty() {
            return;
        }
        let Some(first) = queue.borrow_mut().enqueue(batch) else {
            return;
        };
        let queue = Rc::clone(queue);
        let url = Rc::clone(url);
        leptos::task::spawn_local(async move {
            let mut next = Some(first);
            while let Some(batch) = next {
                match submit_reorder(&url, &batch).await {
                    Ok(()) => log!("saved positions: {}", describe_batch(&batch)),
                    Err(e) => error!("Failed to save positions ({}): {e}", describe_batch(&batch)),
                }
                next = queue.borrow_mut().complete();
            }
        });
    }
}
