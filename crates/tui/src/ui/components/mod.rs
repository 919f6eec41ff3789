//! UI components: tab bar, workflow panel and instructions panel.

pub mod common;
pub mod component;
pub mod instructions;
pub mod tab_bar;
pub mod workflow;

pub(crate) use component::Component;
pub use instructions::InstructionsComponent;
pub use tab_bar::TabBarComponent;
pub use workflow::WorkflowComponent;
