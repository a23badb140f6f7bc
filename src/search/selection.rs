//! Selection state for the suggestion list
//!
//! Tracks which suggestion row is currently selected, if any. Up/Down wrap
//! around the rendered rows.

/// Selection state for suggestion navigation
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Currently selected row index (None = no selection)
    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Clear the current selection
    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    /// Move selection to the next row, wrapping to the first at the end.
    ///
    /// With no prior selection, selects the first row.
    pub fn navigate_next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) => Some((current + 1) % row_count),
            None => Some(0),
        };
    }

    /// Move selection to the previous row, wrapping to the last at the start.
    ///
    /// With no prior selection, selects the last row.
    pub fn navigate_previous(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(0) | None => Some(row_count - 1),
            Some(current) => Some(current - 1),
        };
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
