//! Client configuration read from the server-rendered page.
//!
//! The board markup carries optional `data-*` overrides on `#main-row`;
//! anything missing or unparsable falls back to the defaults below. Requires
//! a browser environment to read overrides; elsewhere the defaults apply.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use board::flip::FlipTiming;

pub const MAIN_ROW_ID: &str = "main-row";
pub const DEFAULT_SYNC_URL: &str = "/work_status/sync_stream";
pub const DEFAULT_REORDER_URL: &str = "/work_status/reorder";

const SYNC_URL_ATTR: &str = "data-sync-url";
const REORDER_URL_ATTR: &str = "data-reorder-url";
const RELOAD_DELAY_ATTR: &str = "data-reload-delay-ms";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub sync_url: String,
    pub reorder_url: String,
    pub reload_delay: Duration,
    pub flip: FlipTiming,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sync_url: DEFAULT_SYNC_URL.to_owned(),
            reorder_url: DEFAULT_REORDER_URL.to_owned(),
            reload_delay: feed::controller::RELOAD_DELAY,
            flip: FlipTiming::default(),
        }
    }
}

impl ClientConfig {
    /// Build a config from attribute lookups, keeping defaults for anything
    /// absent, blank or unparsable.
    pub fn from_attributes(mut attr: impl FnMut(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = non_blank(attr(SYNC_URL_ATTR)) {
            config.sync_url = url;
        }
        if let Some(url) = non_blank(attr(REORDER_URL_ATTR)) {
            config.reorder_url = url;
        }
        if let Some(delay) = attr(RELOAD_DELAY_ATTR).and_then(|raw| parse_millis(&raw)) {
            config.reload_delay = delay;
        }
        config
    }

    /// Read overrides from `#main-row`, or defaults outside the browser.
    pub fn from_page() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(row) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(MAIN_ROW_ID))
            else {
                return Self::default();
            };
            Self::from_attributes(|name| row.get_attribute(name))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_millis(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}
