//! Search box with live suggestions
//!
//! A single-line input that looks up suggestions as the user types, shows
//! them in a dropdown and commits either a picked suggestion or the typed
//! text.

pub mod box_events;
pub mod box_render;
mod box_state;
mod input_state;

pub use box_state::{BoxPhase, OnSearch, SuggestionBox};
pub use input_state::InputState;
