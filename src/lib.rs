//! # taskboard
//!
//! Leptos + WASM interaction layer for the server-rendered task board.
//!
//! The page arrives fully rendered; this crate attaches to it. Drag-and-drop
//! reordering runs through the `board` crate's engine over a DOM surface, and
//! the blocking sync flow runs the `feed` crate's controller over an
//! `EventSource`, rendered by a small Leptos panel.

pub mod board;
pub mod config;
pub mod net;
pub mod sync;

/// WASM entry point: install logging, then bind the board and sync controls.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = config::ClientConfig::from_page();

    let bindings = crate::board::install(&document, &config);
    leptos::logging::log!("board listeners installed: {}", bindings.len());
    bindings.forget();

    match sync::stream::install(&document, &config) {
        Some((_host, listener)) => listener.forget(),
        None => leptos::logging::log!("no sync controls on this page"),
    }
}
