//! Networking for the board client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` posts reorder batches. The sync stream is consumed by
//! [`crate::sync::stream`] through `EventSource`, not from here.

pub mod api;
