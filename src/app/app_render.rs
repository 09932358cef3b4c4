use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::search_box::box_render;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let input_height = box_render::input_height(self.search_box.config().variant);
        let hint_height = if self.show_hint { 1 } else { 0 };

        let [_, input_area, hint_area, _, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(input_height),
            Constraint::Length(hint_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let input_area = inset(input_area);
        let input_rect = box_render::render_input(&self.search_box, frame, input_area);
        self.layout_regions.input_field = Some(input_rect);

        if self.show_hint {
            let hint_area = inset(hint_area);
            box_render::render_hint(frame, hint_area);
            self.layout_regions.hint = Some(hint_area);
        }

        render_footer(self, frame, footer_area);

        // Drawn after the hint so the list covers it
        self.layout_regions.dropdown =
            box_render::render_dropdown(&self.search_box, frame, input_rect);

        self.layout_regions.toasts = render_notification(frame, &mut self.notification);
    }
}

/// Two columns of margin on each side
fn inset(area: Rect) -> Rect {
    let margin = 2.min(area.width / 4);
    Rect {
        x: area.x + margin,
        width: area.width.saturating_sub(margin * 2),
        ..area
    }
}

fn footer_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.search_box.is_open() {
        hints!["↑/↓" => "Elegir", "Enter" => "Buscar", "Esc" => "Cerrar", "Ctrl+C" => "Salir"]
    } else {
        hints!["Enter" => "Buscar", "Ctrl+U" => "Limpiar", "Ctrl+C" => "Salir"]
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let desc_style = Style::default().fg(Color::Gray);
    let sep_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in footer_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, desc_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
