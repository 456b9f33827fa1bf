//! Blocking sync flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `stream` owns the `EventSource` and applies controller commands to the
//! page; `panel` renders progress and the log.

pub mod panel;
pub mod stream;
