use ratatui::layout::Rect;

use crate::ui::components::common::ScrollState;

/// State owned by the instructions tab.
#[derive(Debug, Default)]
pub struct InstructionsViewState {
    pub scroll: ScrollState,
    /// Viewport from the last render, used to route wheel events.
    pub area: Rect,
}
