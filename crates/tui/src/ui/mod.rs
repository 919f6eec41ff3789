//! UI rendering for the TUI: the page shell, its components, the theme, and
//! the event loop that drives them.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
