pub mod state;
pub mod tab_bar_component;

pub use state::TabBarState;
pub use tab_bar_component::TabBarComponent;
