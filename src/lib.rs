//! buscaya library - Search box with live suggestions
//!
//! This library exposes the core functionality of buscaya for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod notification;
pub mod search_box;
pub mod suggest;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use search_box::SuggestionBox;
