mod app_events;
mod app_render;
mod app_state;
mod mouse_events;
mod search_route;

#[cfg(test)]
mod app_render_tests;

pub use app_state::App;
pub use search_route::{SEARCH_PATH, SearchRoute};
