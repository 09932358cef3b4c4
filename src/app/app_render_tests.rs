//! Rendering tests for the whole screen

use crate::app::app_state::App;
use crate::test_utils::test_helpers::{app_with_suggestions, test_app};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_idle_screen() {
    let mut app = test_app(false);

    let output = render_to_string(&mut app, 80, 24);

    assert!(output.contains("Buscar en Negocios Locales"));
    assert!(output.contains("Ctrl+U"));
    assert_eq!(app.layout_regions.input_field, Some(Rect::new(2, 1, 76, 3)));
    assert!(app.layout_regions.dropdown.is_none());
    assert!(app.layout_regions.hint.is_none());
}

#[test]
fn test_open_list_is_tracked() {
    let mut app = app_with_suggestions("piz", &["Pizza YA", "Pizzeria Roma"], false);

    let output = render_to_string(&mut app, 80, 24);

    assert!(output.contains("Pizza YA"));
    assert!(output.contains("Esc"));
    assert_eq!(app.layout_regions.dropdown, Some(Rect::new(2, 4, 76, 4)));
}

#[test]
fn test_hint_line_when_enabled() {
    let mut app = test_app(false);
    app.show_hint = true;

    let output = render_to_string(&mut app, 80, 24);

    assert!(output.contains("Presiona Enter para buscar"));
    assert_eq!(app.layout_regions.hint, Some(Rect::new(2, 4, 76, 1)));
}

#[test]
fn test_toasts_are_tracked() {
    let mut app = test_app(false);
    let id = app.notification.show("Invalid config: expected `=`");

    let output = render_to_string(&mut app, 80, 24);

    assert!(output.contains("Invalid config"));
    assert_eq!(app.layout_regions.toasts.len(), 1);
    assert_eq!(app.layout_regions.toasts[0].0, id);
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut app = app_with_suggestions("piz", &["Pizza YA"], false);
    app.show_hint = true;
    app.notification.show("hola");

    render_to_string(&mut app, 10, 3);
}
