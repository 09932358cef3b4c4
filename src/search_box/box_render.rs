use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::box_state::SuggestionBox;
use crate::config::Variant;
use crate::widgets::popup;

pub const LOADING_MARKER: &str = "Cargando…";
pub const HINT_TEXT: &str = "Presiona Enter para buscar o elige una sugerencia.";

const DROPDOWN_BORDER_HEIGHT: u16 = 2;

/// Rows the input needs for a variant
pub fn input_height(variant: Variant) -> u16 {
    match variant {
        Variant::Solid => 3,
        Variant::Plain => 2,
    }
}

pub fn render_input(search_box: &SuggestionBox, frame: &mut Frame, area: Rect) -> Rect {
    frame.render_widget(&search_box.input.textarea, area);
    area
}

/// Draw the suggestion list under the input.
///
/// Returns the dropdown area, or `None` when the list is closed or there is
/// no room below the input.
pub fn render_dropdown(
    search_box: &SuggestionBox,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !search_box.is_open() {
        return None;
    }

    let suggestions = search_box.visible_suggestions();
    let height = suggestions.len() as u16 + DROPDOWN_BORDER_HEIGHT;
    let area = popup::popup_below_anchor(input_area, height, frame.area());
    if area.height <= DROPDOWN_BORDER_HEIGHT {
        return None;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let loading = search_box.is_loading();

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let selected = search_box.highlighted() == Some(i);
            let (prefix, style) = if selected {
                (
                    "► ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White).bg(Color::Black))
            };

            let label = format!("{}{}", prefix, suggestion.label);
            let mut spans = vec![Span::styled(label.clone(), style)];

            if i == 0 && loading {
                let used = label.chars().count() + LOADING_MARKER.chars().count() + 1;
                let padding = " ".repeat(inner_width.saturating_sub(used));
                spans.push(Span::styled(padding, style));
                spans.push(Span::styled(
                    format!("{} ", LOADING_MARKER),
                    style.fg(Color::DarkGray).remove_modifier(Modifier::BOLD),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sugerencias ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, area);

    Some(area)
}

pub fn render_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(Span::styled(
        HINT_TEXT,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

#[cfg(test)]
#[path = "box_render_tests.rs"]
mod box_render_tests;
