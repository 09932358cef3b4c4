//! Search box event handling
//!
//! Handles keyboard, paste and mouse input for one search box:
//! - Up/Down move the highlight, Enter picks or submits, Escape closes
//! - Ctrl+U / Ctrl+L empty the input
//! - Everything else edits the text and restarts the lookup

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use super::box_state::SuggestionBox;

/// Handle a key press aimed at the search box.
/// Returns true if the key was consumed.
pub fn handle_box_key(search_box: &mut SuggestionBox, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('u') | KeyCode::Char('l'))
    {
        search_box.clear_input();
        return true;
    }

    match key.code {
        KeyCode::Down if search_box.is_open() => {
            search_box.highlight_next();
            true
        }
        KeyCode::Up if search_box.is_open() => {
            search_box.highlight_previous();
            true
        }
        KeyCode::Enter => {
            search_box.confirm();
            true
        }
        KeyCode::Esc if search_box.is_open() || search_box.is_loading() => {
            search_box.dismiss();
            true
        }
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => false,
        _ => {
            if search_box.input.input(key) {
                search_box.on_query_changed();
            }
            true
        }
    }
}

/// Insert pasted text at the cursor
pub fn handle_box_paste(search_box: &mut SuggestionBox, text: &str) {
    if text.is_empty() {
        return;
    }
    search_box.input.insert(text);
    search_box.on_query_changed();
}

/// Row of the dropdown list under screen row `row`, if any.
///
/// The list is drawn inside a one-cell border.
pub fn dropdown_row_at(search_box: &SuggestionBox, dropdown: Rect, row: u16) -> Option<usize> {
    let inner_y = dropdown.y.saturating_add(1);
    let inner_height = dropdown.height.saturating_sub(2);

    if row < inner_y || row >= inner_y.saturating_add(inner_height) {
        return None;
    }

    let index = (row - inner_y) as usize;
    (index < search_box.visible_suggestions().len()).then_some(index)
}

/// Click inside the dropdown: pick the row under the pointer
pub fn click_dropdown(search_box: &mut SuggestionBox, dropdown: Rect, row: u16) {
    if let Some(index) = dropdown_row_at(search_box, dropdown, row) {
        search_box.pick(index);
    }
}

/// Pointer over the dropdown: highlight the row under it
pub fn hover_dropdown(search_box: &mut SuggestionBox, dropdown: Rect, row: u16) {
    if let Some(index) = dropdown_row_at(search_box, dropdown, row) {
        search_box.set_highlight(index);
    }
}

#[cfg(test)]
#[path = "box_events_tests.rs"]
mod box_events_tests;
