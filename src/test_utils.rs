#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{Receiver, Sender};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::search::{SearchRequest, SearchResponse};

    /// Build an App with test channels in place of the worker thread.
    ///
    /// Returns the request receiver (to observe what the controller sends)
    /// and the response sender (to play the endpoint's part).
    pub fn test_app() -> (App, Receiver<SearchRequest>, Sender<SearchResponse>) {
        let mut app = App::detached();
        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let (response_tx, response_rx) = std::sync::mpsc::channel();
        app.suggestions.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_char(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Drain the latest issued request and answer it with `suggestions`.
    ///
    /// Panics if no request was issued.
    pub fn respond(
        app: &mut App,
        request_rx: &Receiver<SearchRequest>,
        response_tx: &Sender<SearchResponse>,
        suggestions: Vec<String>,
    ) {
        let mut latest_id = None;
        while let Ok(msg) = request_rx.try_recv() {
            if let SearchRequest::Query { request_id, .. } = msg {
                latest_id = Some(request_id);
            }
        }
        let request_id = latest_id.expect("a search request should have been issued");
        response_tx
            .send(SearchResponse::Results {
                suggestions,
                request_id,
            })
            .expect("response channel open");
        app.suggestions.drain_responses();
    }
}
