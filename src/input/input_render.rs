//! Search box rendering
//!
//! The input field sits at the top of the screen, above the suggestion list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use crate::app::App;

/// Render the search box (top)
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    // Re-apply the block each frame so the title stays current even after
    // tui-textarea internal edits.
    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(&app.input.textarea, area);
}
