//! Frame rendering
//!
//! Search box on top, suggestion list below. Rendered areas are recorded in
//! the layout regions so mouse clicks can be hit-tested next tick.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::state::App;
use crate::input::input_render;
use crate::search::search_render;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Search box is fixed 3 lines
            Constraint::Min(3),    // Suggestion list takes the rest
        ])
        .split(frame.area());

        let input_area = layout[0];
        let list_area = layout[1];

        self.regions.input_field = Some(input_area);
        self.regions.suggestion_list = Some(list_area);
        self.regions.visible_suggestions = self.visible_suggestion_count();

        input_render::render_field(self, frame, input_area);
        search_render::render_list(self, frame, list_area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
