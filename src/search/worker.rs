//! Search worker thread
//!
//! Fetches suggestions in a background thread so keystrokes never block on
//! the network. Receives requests via channel, calls the search endpoint,
//! and sends the tagged response back to the main thread.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::client::SearchClient;
use super::suggestion_state::{SearchRequest, SearchResponse};

/// Spawn the search worker thread
///
/// The worker owns a single-threaded tokio runtime for the HTTP client and
/// processes requests until the request channel is closed.
pub fn spawn_worker(
    client: SearchClient,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: SearchClient,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("failed to start search runtime: {e}");
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let Some((query, request_id)) = coalesce(request, &request_rx, &response_tx) else {
            continue;
        };

        let response = match runtime.block_on(client.fetch(&query)) {
            Ok(suggestions) => SearchResponse::Results {
                suggestions,
                request_id,
            },
            Err(e) => SearchResponse::Failed {
                error: e.to_string(),
                request_id,
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop working
            return;
        }
    }

    log::debug!("search worker shutting down");
}

/// Collapse queued requests down to the newest query
///
/// Typing faster than the network responds queues several requests; only the
/// latest is worth fetching. Superseded queries and cancelled requests are
/// acknowledged as `Cancelled` so the main thread can settle its loading
/// state. Returns the query to fetch, or None if everything was cancelled.
fn coalesce(
    first: SearchRequest,
    request_rx: &Receiver<SearchRequest>,
    response_tx: &Sender<SearchResponse>,
) -> Option<(String, u64)> {
    let mut pending = match first {
        SearchRequest::Query { query, request_id } => Some((query, request_id)),
        SearchRequest::Cancel { request_id } => {
            // Cancel received when no request is queued - just acknowledge
            let _ = response_tx.send(SearchResponse::Cancelled { request_id });
            None
        }
    };

    loop {
        match request_rx.try_recv() {
            Ok(SearchRequest::Query { query, request_id }) => {
                if let Some((_, superseded_id)) = pending.take() {
                    let _ = response_tx.send(SearchResponse::Cancelled {
                        request_id: superseded_id,
                    });
                    log::debug!("request {superseded_id} superseded by {request_id}");
                }
                pending = Some((query, request_id));
            }
            Ok(SearchRequest::Cancel { request_id }) => {
                match pending {
                    Some((_, pending_id)) if pending_id == request_id => {
                        pending = None;
                    }
                    _ => {}
                }
                let _ = response_tx.send(SearchResponse::Cancelled { request_id });
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return pending,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
