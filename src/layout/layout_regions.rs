use ratatui::layout::Rect;

/// UI regions that respond to mouse clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The search box
    InputField,
    /// A suggestion row, by index into the rendered list
    Suggestion(usize),
}

/// Where UI components were rendered on the last frame
///
/// Updated during rendering; `None` until the first frame has been drawn.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub suggestion_list: Option<Rect>,
    /// Number of suggestion rows actually rendered inside the list border
    pub visible_suggestions: usize,
}
