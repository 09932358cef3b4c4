use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::search_box::box_events;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// One event-loop step: advance the box, then wait briefly for input
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.search_box.update();
        self.check_suggestions_available();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Mouse(mouse) => {
                    mouse_events::handle_mouse_event(self, mouse);
                }
                _ => {}
            }
        }

        self.drain_commits();
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: String) {
        box_events::handle_box_paste(&mut self.search_box, &text);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
        {
            self.should_quit = true;
            return;
        }

        if box_events::handle_box_key(&mut self.search_box, key) {
            self.drain_commits();
            return;
        }

        // Escape with nothing to close dismisses the toasts
        if key.code == KeyCode::Esc {
            self.notification.clear();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
