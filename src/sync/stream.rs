//! Browser host for the sync session.
//!
//! Owns the `EventSource`, feeds every message into one
//! [`feed::SyncController`] and carries out the commands it returns against
//! the page. The controller's view is republished into a signal after every
//! step so [`crate::sync::panel::SyncPanel`] re-renders.
//!
//! ERROR HANDLING
//! ==============
//! Malformed progress messages are logged and dropped. A channel error, or a
//! channel that ends before a terminal message, is reported to the controller
//! as a transport failure, which restores the page.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

pub const SYNC_BUTTON_ID: &str = "js-sync";
pub const SYNC_CONTAINER_ID: &str = "sync-container";
pub const HIDDEN_CLASS: &str = "hidden";

/// Inline `display` for the sync container in each mode.
#[must_use]
pub fn container_display(blocking: bool) -> &'static str {
    if blocking { "block" } else { "none" }
}

#[cfg(feature = "hydrate")]
pub use browser::{SyncHost, install};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use chrono::Utc;
    use feed::{Command, FeedError, SyncController, SyncView};
    use futures::StreamExt;
    use futures::channel::oneshot;
    use gloo_events::EventListener;
    use gloo_net::eventsource::futures::EventSource;
    use leptos::logging::{log, warn};
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, HtmlElement};

    use super::{HIDDEN_CLASS, SYNC_BUTTON_ID, SYNC_CONTAINER_ID, container_display};
    use crate::config::{ClientConfig, MAIN_ROW_ID};
    use crate::sync::panel::{LOG_ID, SyncPanel};

    /// An open stream. Dropping it closes the source and ends its reader.
    struct Channel {
        source: EventSource,
        _reader_stop: oneshot::Sender<()>,
    }

    pub struct SyncHost {
        document: Document,
        sync_url: String,
        controller: RefCell<SyncController>,
        channel: RefCell<Option<Channel>>,
        /// Bumped per opened channel so a stale reader can tell it is stale.
        generation: Cell<u64>,
        view: RwSignal<SyncView>,
    }

    /// Mount the panel into `#sync-container` and bind the sync button.
    ///
    /// Returns `None` when the page has no sync controls.
    pub fn install(document: &Document, config: &ClientConfig) -> Option<(Rc<SyncHost>, EventListener)> {
        let button = document.get_element_by_id(SYNC_BUTTON_ID)?;
        let container = document.get_element_by_id(SYNC_CONTAINER_ID)?.dyn_into::<HtmlElement>().ok()?;

        let state = RwSignal::new(SyncView::default());
        container.set_inner_html("");
        leptos::mount::mount_to(container, move || view! { <SyncPanel sync=state/> }).forget();

        let host = Rc::new(SyncHost {
            document: document.clone(),
            sync_url: config.sync_url.clone(),
            controller: RefCell::new(SyncController::with_reload_delay(config.reload_delay)),
            channel: RefCell::new(None),
            generation: Cell::new(0),
            view: state,
        });

        let click_host = Rc::clone(&host);
        let listener = EventListener::new_with_options(
            &button,
            "click",
            gloo_events::EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                click_host.start();
            },
        );
        Some((host, listener))
    }

    impl SyncHost {
        pub fn start(self: &Rc<Self>) {
            let started = self.controller.borrow_mut().start(Utc::now());
            match started {
                Ok(commands) => self.apply(commands),
                Err(err) => warn!("sync not started: {err}"),
            }
        }

        fn on_data(self: &Rc<Self>, raw: &str) {
            let step = self.controller.borrow_mut().on_data(raw, Utc::now());
            match step {
                Ok(commands) => self.apply(commands),
                Err(FeedError::Wire(err)) => warn!("dropped sync message: {err}"),
                Err(err) => warn!("sync message rejected: {err}"),
            }
        }

        fn on_transport_error(self: &Rc<Self>) {
            let commands = self.controller.borrow_mut().on_transport_error(Utc::now());
            self.apply(commands);
        }

        fn apply(self: &Rc<Self>, commands: Vec<Command>) {
            self.view.set(self.controller.borrow().view().clone());
            for command in commands {
                match command {
                    Command::ShowBlocking => self.set_blocking(true),
                    Command::RestoreUi => self.set_blocking(false),
                    Command::OpenChannel => self.open_channel(),
                    Command::CloseChannel => {
                        if let Some(channel) = self.channel.borrow_mut().take() {
                            channel.source.close();
                        }
                    }
                    Command::ScrollLog => self.scroll_log(),
                    Command::ScheduleRestore(delay) => self.schedule_restore(delay),
                    Command::ReloadPage => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }
                }
            }
        }

        fn element(&self, id: &str) -> Option<Element> {
            self.document.get_element_by_id(id)
        }

        fn set_blocking(&self, blocking: bool) {
            if let Some(row) = self.element(MAIN_ROW_ID) {
                let _ = row.class_list().toggle_with_force(HIDDEN_CLASS, blocking);
            }
            if let Some(container) = self.element(SYNC_CONTAINER_ID).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
                let _ = container.style().set_property("display", container_display(blocking));
            }
        }

        fn open_channel(self: &Rc<Self>) {
            let mut source = match EventSource::new(&self.sync_url) {
                Ok(source) => source,
                Err(err) => {
                    warn!("sync stream failed to open: {err:?}");
                    self.on_transport_error();
                    return;
                }
            };
            let messages = match source.subscribe("message") {
                Ok(messages) => messages,
                Err(err) => {
                    warn!("sync stream subscribe failed: {err:?}");
                    self.on_transport_error();
                    return;
                }
            };
            let (reader_stop, stopped) = oneshot::channel::<()>();
            let mut messages = messages.take_until(stopped);
            *self.channel.borrow_mut() = Some(Channel { source, _reader_stop: reader_stop });
            let generation = self.generation.get() + 1;
            self.generation.set(generation);
            log!("sync stream opened: {}", self.sync_url);

            let host = Rc::clone(self);
            leptos::task::spawn_local(async move {
                while let Some(item) = messages.next().await {
                    if !host.is_current(generation) {
                        return;
                    }
                    match item {
                        Ok((_, message)) => {
                            let raw = message.data().as_string().unwrap_or_default();
                            host.on_data(&raw);
                        }
                        Err(err) => {
                            warn!("sync stream error: {err}");
                            host.on_transport_error();
                            break;
                        }
                    }
                }
                // Ended without a terminal message.
                if host.is_current(generation) {
                    host.on_transport_error();
                }
            });
        }

        /// Whether `generation`'s channel is still the open one.
        fn is_current(&self, generation: u64) -> bool {
            self.generation.get() == generation && self.channel.borrow().is_some()
        }

        fn scroll_log(&self) {
            let document = self.document.clone();
            // Let the panel render the new line first.
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(Duration::ZERO).await;
                if let Some(log) = document.get_element_by_id(LOG_ID) {
                    log.set_scroll_top(log.scroll_height());
                }
            });
        }

        fn schedule_restore(self: &Rc<Self>, delay: Duration) {
            let host = Rc::clone(self);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                let commands = host.controller.borrow_mut().on_restore_timer(Utc::now());
                host.apply(commands);
            });
        }
    }
}
