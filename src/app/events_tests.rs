//! Tests for key event handling

use crossterm::event::{KeyCode, KeyModifiers};

use crate::search::SearchRequest;
use crate::test_utils::test_helpers::{key, key_char, key_with_mods, respond, test_app};

#[test]
fn test_typing_a_character_issues_one_request() {
    let (mut app, request_rx, _response_tx) = test_app();

    app.handle_key_event(key_char('i'));

    let msg = request_rx.try_recv().unwrap();
    assert!(matches!(
        msg,
        SearchRequest::Query { ref query, .. } if query == "i"
    ));
    assert!(
        request_rx.try_recv().is_err(),
        "exactly one request per input event"
    );
}

#[test]
fn test_each_keystroke_issues_its_own_request() {
    let (mut app, request_rx, _response_tx) = test_app();

    app.handle_key_event(key_char('i'));
    app.handle_key_event(key_char('n'));

    let mut queries = Vec::new();
    while let Ok(msg) = request_rx.try_recv() {
        if let SearchRequest::Query { query, .. } = msg {
            queries.push(query);
        }
    }
    assert_eq!(queries, vec!["i", "in"]);
}

#[test]
fn test_cursor_movement_issues_no_request() {
    let (mut app, request_rx, _response_tx) = test_app();
    app.handle_key_event(key_char('i'));
    app.handle_key_event(key_char('n'));
    while request_rx.try_recv().is_ok() {}

    app.handle_key_event(key(KeyCode::Left));
    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Home));

    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_backspace_to_empty_clears_and_cancels() {
    let (mut app, request_rx, response_tx) = test_app();
    app.handle_key_event(key_char('a'));
    respond(&mut app, &request_rx, &response_tx, vec!["Alien".to_string()]);

    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.query(), "");
    assert!(app.suggestions.suggestions().is_empty());
    // The empty query never issues a new fetch.
    while let Ok(msg) = request_rx.try_recv() {
        assert!(matches!(msg, SearchRequest::Cancel { .. }));
    }
}

#[test]
fn test_out_of_order_responses_render_latest_query() {
    let (mut app, request_rx, response_tx) = test_app();

    app.handle_key_event(key_char('a'));
    app.handle_key_event(key_char('b'));

    let mut ids = Vec::new();
    while let Ok(msg) = request_rx.try_recv() {
        if let SearchRequest::Query { request_id, .. } = msg {
            ids.push(request_id);
        }
    }
    let (first_id, second_id) = (ids[0], ids[1]);

    // The response for "a" resolves after the request for "ab" was issued.
    response_tx
        .send(crate::search::SearchResponse::Results {
            suggestions: vec!["Alien".to_string()],
            request_id: first_id,
        })
        .unwrap();
    response_tx
        .send(crate::search::SearchResponse::Results {
            suggestions: vec!["Abyss".to_string()],
            request_id: second_id,
        })
        .unwrap();
    app.suggestions.drain_responses();

    assert_eq!(app.suggestions.suggestions(), ["Abyss"]);
}

#[test]
fn test_down_up_navigate_with_wrap() {
    let (mut app, request_rx, response_tx) = test_app();
    app.handle_key_event(key_char('i'));
    respond(
        &mut app,
        &request_rx,
        &response_tx,
        vec!["Inception".to_string(), "Interstellar".to_string()],
    );

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.suggestions.selection.get_selected(), Some(0));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.suggestions.selection.get_selected(), Some(1));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.suggestions.selection.get_selected(), Some(0));
    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.suggestions.selection.get_selected(), Some(1));
}

#[test]
fn test_enter_activates_selected_suggestion() {
    let (mut app, request_rx, response_tx) = test_app();
    app.handle_key_event(key_char('i'));
    respond(
        &mut app,
        &request_rx,
        &response_tx,
        vec!["Inception".to_string(), "Interstellar".to_string()],
    );

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.query(), "Inception");
    assert!(app.suggestions.suggestions().is_empty());
}

#[test]
fn test_enter_without_selection_does_nothing() {
    let (mut app, request_rx, response_tx) = test_app();
    app.handle_key_event(key_char('i'));
    respond(&mut app, &request_rx, &response_tx, vec!["Inception".to_string()]);

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.query(), "i");
    assert_eq!(app.suggestions.suggestions(), ["Inception"]);
}

#[test]
fn test_enter_does_not_insert_newline() {
    let (mut app, _request_rx, _response_tx) = test_app();
    app.handle_key_event(key_char('i'));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.input.textarea.lines().len(), 1);
}

#[test]
fn test_esc_clears_suggestions_then_quits() {
    let (mut app, request_rx, response_tx) = test_app();
    app.handle_key_event(key_char('i'));
    respond(&mut app, &request_rx, &response_tx, vec!["Inception".to_string()]);

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.suggestions.suggestions().is_empty());
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let (mut app, _request_rx, _response_tx) = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_typing_after_activation_searches_again() {
    let (mut app, request_rx, response_tx) = test_app();
    app.handle_key_event(key_char('d'));
    respond(&mut app, &request_rx, &response_tx, vec!["Dune".to_string()]);
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));
    while request_rx.try_recv().is_ok() {}

    app.handle_key_event(key_char('s'));

    let msg = request_rx.try_recv().unwrap();
    assert!(matches!(
        msg,
        SearchRequest::Query { ref query, .. } if query == "Dunes"
    ));
}
