//! Application state
//!
//! `App` composes the search box, the suggestion list, and the layout
//! regions, and owns the two controller operations: reacting to a query
//! change and activating a suggestion.

use std::sync::mpsc;
use std::time::Duration;

use crate::config::Config;
use crate::error::ReelfindError;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::search::{SearchClient, SuggestionState, spawn_worker};

/// Application state
pub struct App {
    pub input: InputState,
    pub suggestions: SuggestionState,
    pub regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    /// Create the App and spawn the search worker
    pub fn new(config: &Config) -> Result<Self, ReelfindError> {
        let client = SearchClient::new(
            &config.search.endpoint,
            Duration::from_millis(config.search.timeout_ms),
        )?;

        let mut suggestions = SuggestionState::new();
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(client, request_rx, response_tx);
        suggestions.set_channels(request_tx, response_rx);

        Ok(Self {
            input: InputState::new(),
            suggestions,
            regions: LayoutRegions::default(),
            should_quit: false,
        })
    }

    /// Create an App with no worker attached; tests wire their own channels.
    #[cfg(test)]
    pub fn detached() -> Self {
        Self {
            input: InputState::new(),
            suggestions: SuggestionState::new(),
            regions: LayoutRegions::default(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current query text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// React to a change in the search box text
    ///
    /// An empty query clears the list without issuing a request; anything
    /// else cancels the in-flight request and issues exactly one new one.
    pub fn on_query_changed(&mut self) {
        let query = self.query().to_string();
        if !self.suggestions.is_query_changed(&query) {
            return;
        }
        self.suggestions.set_last_query_hash(&query);
        self.suggestions.cancel_in_flight_request();

        if query.is_empty() {
            self.suggestions.clear();
        } else {
            self.suggestions.send_request(query);
        }
    }

    /// Copy the suggestion at `index` into the search box and clear the list
    ///
    /// Activation must not fire another search, so the new text is recorded
    /// as the last requested query before the input is updated.
    pub fn activate_suggestion(&mut self, index: usize) {
        if let Some(chosen) = self.suggestions.activate(index) {
            self.suggestions.cancel_in_flight_request();
            self.suggestions.set_last_query_hash(&chosen);
            self.input.set_text(&chosen);
        }
    }

    /// Number of suggestion rows currently rendered
    pub fn visible_suggestion_count(&self) -> usize {
        self.suggestions
            .suggestions()
            .len()
            .min(crate::search::search_render::MAX_VISIBLE_SUGGESTIONS)
    }
}
