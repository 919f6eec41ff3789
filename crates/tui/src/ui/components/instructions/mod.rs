pub mod instructions_component;
pub mod state;

pub use instructions_component::InstructionsComponent;
pub use state::InstructionsViewState;
