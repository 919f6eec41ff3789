pub mod state;
pub mod workflow_component;

pub use state::WorkflowViewState;
pub use workflow_component::WorkflowComponent;
