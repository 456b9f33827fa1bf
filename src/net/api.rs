//! REST calls the board makes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: the call reports a transport failure since the endpoint is
//! only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Persistence is optimistic. The DOM has already moved by the time a batch
//! is sent, so callers only log a [`PersistError`]; nothing is rolled back.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::ReorderRequest;

/// Why a reorder batch did not reach the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistError {
    #[error("reorder request failed: {0}")]
    Transport(String),
    #[error("reorder rejected with status {0}")]
    Status(u16),
    #[error("reorder payload could not be encoded: {0}")]
    Encode(String),
}

pub type PersistOutcome = Result<(), PersistError>;

#[cfg(any(test, feature = "hydrate"))]
fn status_outcome(status: u16) -> PersistOutcome {
    if (200..300).contains(&status) { Ok(()) } else { Err(PersistError::Status(status)) }
}

/// Summary used when logging a submission.
#[must_use]
pub fn describe_batch(batch: &ReorderRequest) -> String {
    match batch.status() {
        Some(status) => format!("{} card(s) in {status}", batch.positions.len()),
        None => "empty batch".to_owned(),
    }
}

/// `POST` `batch` as JSON to `url`. Any 2xx is success; the body is ignored.
///
/// # Errors
///
/// Returns [`PersistError`] when the payload cannot be encoded, the request
/// cannot be sent or the server answers outside 2xx.
pub async fn submit_reorder(url: &str, batch: &ReorderRequest) -> PersistOutcome {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(batch)
            .map_err(|e| PersistError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| PersistError::Transport(e.to_string()))?;
        status_outcome(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, batch);
        Err(PersistError::Transport("not available outside the browser".to_owned()))
    }
}
