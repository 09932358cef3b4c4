//! Layout regions tracking for UI components

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Hint,
    /// Suggestion list below the input
    Dropdown,
    /// A toast, by id
    Toast(u64),
}

/// Tracks rendered areas of UI components
///
/// Rebuilt on every render pass. Regions are `None` (or empty) when the
/// component is not visible.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub hint: Option<Rect>,
    pub dropdown: Option<Rect>,
    /// Toast areas, oldest first
    pub toasts: Vec<(u64, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
