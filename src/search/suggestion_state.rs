//! Suggestion list state management
//!
//! Owns the rendered suggestion list, the selection, and the channels to the
//! search worker. Every request carries an increasing request id; a response
//! is applied only when its id matches the request currently in flight, so a
//! slow response for an old query can never overwrite results for a newer one.

use std::sync::mpsc::{Receiver, Sender};

use super::selection::SelectionState;

/// Request messages sent to the search worker thread
#[derive(Debug)]
pub enum SearchRequest {
    /// Fetch suggestions for the given query text
    Query {
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the search worker thread
#[derive(Debug)]
pub enum SearchResponse {
    /// Suggestions for the request, in endpoint order
    Results {
        suggestions: Vec<String>,
        request_id: u64,
    },
    /// The fetch failed; the error is logged, never shown
    Failed { error: String, request_id: u64 },
    /// The request was cancelled or superseded before completing
    Cancelled { request_id: u64 },
}

/// Suggestion list state
pub struct SuggestionState {
    /// Rendered suggestions, replaced wholesale per completed response
    suggestions: Vec<String>,
    /// Which row is selected for keyboard activation
    pub selection: SelectionState,
    /// Whether a request is in flight
    pub loading: bool,
    /// Last fetch failure, kept for the debug log only
    pub last_error: Option<String>,
    /// Channel to send requests to the worker thread
    request_tx: Option<Sender<SearchRequest>>,
    /// Channel to receive responses from the worker thread
    response_rx: Option<Receiver<SearchResponse>>,
    /// Current request ID, incremented for each new request
    request_id: u64,
    /// ID of the request currently in flight, if any
    in_flight_request_id: Option<u64>,
    /// Hash of the last query text a request was issued for (or that was
    /// activated into the input), used to detect real text changes
    last_query_hash: Option<u64>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            selection: SelectionState::new(),
            loading: false,
            last_error: None,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
            last_query_hash: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// The rendered suggestion list
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Clear the rendered list and selection
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.selection.clear_selection();
        self.loading = false;
        self.last_error = None;
    }

    /// Check whether `query` differs from the last query a request was issued
    /// for. Cursor movement and suggestion activation must not re-trigger a
    /// search, so callers gate on this before sending.
    pub fn is_query_changed(&self, query: &str) -> bool {
        let query_hash = Self::compute_query_hash(query);
        match self.last_query_hash {
            None => true,
            Some(last_hash) => query_hash != last_hash,
        }
    }

    /// Record `query` as the text the current list corresponds to
    pub fn set_last_query_hash(&mut self, query: &str) {
        self.last_query_hash = Some(Self::compute_query_hash(query));
    }

    /// Send a search request for `query`
    ///
    /// Increments the request id and marks it in flight, so any response
    /// still pending for an earlier request becomes stale. Returns true if
    /// the request reached the worker channel.
    pub fn send_request(&mut self, query: String) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.start_request();
        let request_id = self.request_id;

        if let Some(ref tx) = self.request_tx
            && tx.send(SearchRequest::Query { query, request_id }).is_ok()
        {
            return true;
        }
        false
    }

    /// Begin a new request generation
    ///
    /// The previous list stays on screen until the response arrives; the
    /// rendered list always reflects the most recently completed request.
    fn start_request(&mut self) {
        self.loading = true;
        self.last_error = None;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
    }

    /// Send a cancel for the in-flight request, if there is one
    ///
    /// Returns true if a cancel was sent.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        if let Some(request_id) = self.in_flight_request_id
            && let Some(ref tx) = self.request_tx
            && tx.send(SearchRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("sent cancel for request {request_id}");
            self.in_flight_request_id = None;
            self.loading = false;
            return true;
        }
        false
    }

    /// Check if there's an in-flight request
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Current request ID
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Apply a worker response
    ///
    /// Responses whose id does not match the in-flight request are stale
    /// (an earlier keystroke's fetch finishing late) and are dropped.
    pub fn apply_response(&mut self, response: SearchResponse) {
        match response {
            SearchResponse::Results {
                suggestions,
                request_id,
            } => {
                if Some(request_id) != self.in_flight_request_id {
                    log::debug!("dropping stale results for request {request_id}");
                    return;
                }
                self.suggestions = suggestions;
                self.selection.clear_selection();
                self.loading = false;
                self.last_error = None;
                self.in_flight_request_id = None;
            }
            SearchResponse::Failed { error, request_id } => {
                if Some(request_id) != self.in_flight_request_id {
                    log::debug!("dropping stale failure for request {request_id}");
                    return;
                }
                // Failures are absorbed: clear the list, log, show nothing.
                log::debug!("search request {request_id} failed: {error}");
                self.suggestions.clear();
                self.selection.clear_selection();
                self.loading = false;
                self.last_error = Some(error);
                self.in_flight_request_id = None;
            }
            SearchResponse::Cancelled { request_id } => {
                log::debug!("request {request_id} cancelled");
                if Some(request_id) == self.in_flight_request_id {
                    self.in_flight_request_id = None;
                    self.loading = false;
                }
            }
        }
    }

    /// Drain and apply all pending worker responses
    pub fn drain_responses(&mut self) {
        let Some(rx) = self.response_rx.take() else {
            return;
        };
        while let Ok(response) = rx.try_recv() {
            self.apply_response(response);
        }
        self.response_rx = Some(rx);
    }

    /// Take the suggestion at `index`, clearing the list
    ///
    /// Returns None if the index is out of range.
    pub fn activate(&mut self, index: usize) -> Option<String> {
        let chosen = self.suggestions.get(index).cloned()?;
        self.clear();
        Some(chosen)
    }

    fn compute_query_hash(query: &str) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        query.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;
