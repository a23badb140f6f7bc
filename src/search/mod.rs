//! Live search suggestions
//!
//! Keeps the suggestion list synchronized with the query text. Each change to
//! the query sends one request to a background worker, which fetches candidate
//! titles from the search endpoint. Responses are tagged with a request id so
//! that only the response to the latest request ever reaches the screen.

mod client;
mod selection;
mod suggestion_state;
mod worker;

pub mod search_render;

pub use client::{SearchClient, SearchError, parse_suggestions};
pub use selection::SelectionState;
pub use suggestion_state::{SearchRequest, SearchResponse, SuggestionState};
pub use worker::spawn_worker;
