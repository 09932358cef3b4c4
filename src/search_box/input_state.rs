use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::Variant;

/// Single-line text input of the search box
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(placeholder: &str, title: &str, variant: Variant) -> Self {
        let mut textarea = TextArea::default();

        let block = match variant {
            Variant::Solid => Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(Color::Cyan)),
            Variant::Plain => Block::default().title(format!(" {} ", title)),
        };
        textarea.set_block(block);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole line, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.insert(text);
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Insert at the cursor. Line breaks become spaces: the box is one line.
    pub fn insert(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.textarea.insert_str(flat);
    }

    /// Feed an editing key to the text area. Returns whether the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let before = self.text().to_string();
        self.textarea.input(key);
        self.text() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{key, key_with_mods};
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn input() -> InputState {
        InputState::new("Buscar en Negocios Locales…", "Negocios Locales", Variant::Solid)
    }

    #[test]
    fn test_starts_empty() {
        assert_eq!(input().text(), "");
    }

    #[test]
    fn test_typing_changes_text() {
        let mut state = input();
        assert!(state.input(key(KeyCode::Char('p'))));
        assert!(state.input(key(KeyCode::Char('i'))));
        assert_eq!(state.text(), "pi");
    }

    #[test]
    fn test_cursor_move_is_not_a_change() {
        let mut state = input();
        state.set_text("piz");
        assert!(!state.input(key(KeyCode::Left)));
        assert_eq!(state.text(), "piz");
    }

    #[test]
    fn test_backspace() {
        let mut state = input();
        state.set_text("pizza");
        assert!(state.input(key(KeyCode::Backspace)));
        assert_eq!(state.text(), "pizz");
    }

    #[test]
    fn test_set_text_replaces() {
        let mut state = input();
        state.set_text("tacos");
        state.set_text("pizza");
        assert_eq!(state.text(), "pizza");
    }

    #[test]
    fn test_insert_flattens_newlines() {
        let mut state = input();
        state.insert("tacos\nal pastor\r\n");
        assert_eq!(state.text(), "tacos al pastor  ");
        assert_eq!(state.textarea.lines().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut state = input();
        state.set_text("pizza");
        state.clear();
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_ctrl_modified_char_does_not_insert() {
        let mut state = input();
        state.input(key_with_mods(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(state.text(), "");
    }
}
