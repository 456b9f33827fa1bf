//! Blocking sync panel: progress bar above a timestamped log.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the [`SyncView`] published by [`crate::sync::stream`]. The panel
//! is mounted once into `#sync-container`; showing and hiding the container
//! is the stream host's job.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use feed::{LineKind, LogLine, Progress, SyncView};
use leptos::prelude::*;

pub const PROGRESS_ID: &str = "sync-progress";
pub const LOG_ID: &str = "sync-log";

/// Sync progress and log for the running session.
#[component]
pub fn SyncPanel(sync: RwSignal<SyncView>) -> impl IntoView {
    let value = move || progress_value(sync.get().progress);
    let max = move || progress_max(sync.get().progress);
    let label = move || progress_label(sync.get().progress);
    let lines = move || sync.get().log;

    view! {
        <div class="sync-panel">
            <progress id=PROGRESS_ID value=value max=max></progress>
            <span class="sync-panel__count">{label}</span>
            <div id=LOG_ID class="sync-panel__log">
                <For each=lines key=|line: &LogLine| line.seq let:line>
                    <div style=line_style(line.kind)>{line.render()}</div>
                </For>
            </div>
        </div>
    }
}

fn progress_value(progress: Progress) -> String {
    progress.value.to_string()
}

/// `max` attribute; absent until the server declares a total.
fn progress_max(progress: Progress) -> Option<String> {
    progress.max.map(|max| max.to_string())
}

fn progress_label(progress: Progress) -> String {
    match progress.max {
        Some(max) => format!("{} / {max}", progress.value),
        None => format!("{} / ?", progress.value),
    }
}

fn line_style(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Info => "",
        LineKind::Error => "color: red",
    }
}
