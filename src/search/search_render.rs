//! Suggestion list rendering
//!
//! Renders the suggestion list below the search box. The selected row is
//! highlighted; titles wider than the pane are truncated with an ellipsis.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;

/// The endpoint returns at most 10 titles; never render more rows than that.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;

/// Render the suggestion list (below the search box)
pub fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let title = if app.suggestions.loading {
        " Suggestions (searching) "
    } else {
        " Suggestions "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_width = area.width.saturating_sub(2) as usize;
    let selected = app.suggestions.selection.get_selected();

    let items: Vec<ListItem> = app
        .suggestions
        .suggestions()
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .enumerate()
        .map(|(i, suggestion)| {
            let style = if selected == Some(i) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(fit_to_width(suggestion, inner_width)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Truncate `text` to at most `max_width` terminal columns
///
/// Width is measured in display columns, not chars, so double-width CJK
/// titles truncate correctly. A truncated title ends with an ellipsis.
fn fit_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= max_width || max_width == 0 {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis.
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
