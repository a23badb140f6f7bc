//! Event handling
//!
//! Polls the terminal with a short tick so worker responses render promptly
//! even when the user is not typing.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::mouse_click;
use super::state::App;
use crate::layout::region_at;

/// How long to wait for a terminal event before checking worker responses
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Handle terminal events and apply any completed search responses
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                _ => {}
            }
        }

        self.suggestions.drain_responses();
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            // Esc clears the list first; with nothing to clear, it quits.
            KeyCode::Esc => {
                if self.suggestions.suggestions().is_empty() {
                    self.should_quit = true;
                } else {
                    self.suggestions.cancel_in_flight_request();
                    self.suggestions.clear();
                }
            }
            KeyCode::Down => {
                let count = self.visible_suggestion_count();
                self.suggestions.selection.navigate_next(count);
            }
            KeyCode::Up => {
                let count = self.visible_suggestion_count();
                self.suggestions.selection.navigate_previous(count);
            }
            // Enter activates the selected suggestion; without a selection it
            // does nothing (the input is single-line).
            KeyCode::Enter => {
                if let Some(index) = self.suggestions.selection.get_selected() {
                    self.activate_suggestion(index);
                }
            }
            // Everything else edits the query.
            _ => {
                let before = self.query().to_string();
                self.input.textarea.input(key);
                if self.query() != before {
                    self.on_query_changed();
                }
            }
        }
    }

    /// Handle mouse events (left click activates suggestions)
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
