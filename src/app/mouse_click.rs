//! Mouse click handling
//!
//! Routes left clicks to the component under the cursor.

use super::state::App;
use crate::layout::Region;

/// Handle a left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Suggestion(index)) => app.activate_suggestion(index),
        // The search box always has focus; a click on it changes nothing.
        Some(Region::InputField) | None => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
