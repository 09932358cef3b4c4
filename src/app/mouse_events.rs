//! Mouse event dispatcher
//!
//! Routes mouse events to the component under the pointer.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};
use crate::search_box::box_events;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, region, mouse),
        MouseEventKind::Moved => handle_hover(app, region, mouse),
        _ => {}
    }
}

fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Toast(id)) => {
            app.notification.close(id);
        }
        Some(Region::Dropdown) => {
            if let Some(dropdown) = app.layout_regions.dropdown {
                box_events::click_dropdown(&mut app.search_box, dropdown, mouse.row);
                app.drain_commits();
            }
        }
        Some(Region::InputField) => {}
        // Anywhere else counts as outside the box
        Some(Region::Hint) | None => {
            if app.search_box.is_open() {
                app.search_box.dismiss();
            }
        }
    }
}

fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if region == Some(Region::Dropdown)
        && let Some(dropdown) = app.layout_regions.dropdown
    {
        box_events::hover_dropdown(&mut app.search_box, dropdown, mouse.row);
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
