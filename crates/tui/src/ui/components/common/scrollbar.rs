//! Themed scrollbar shared by the scrollable panels.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::ScrollState;
use crate::ui::theme::Theme;

/// Draws a vertical scrollbar on the right border of `area` when the content
/// overflows; draws nothing otherwise.
pub fn render_vertical_scrollbar(frame: &mut Frame, area: Rect, theme: &dyn Theme, scroll: &ScrollState) {
    let max_offset = scroll.max_offset();
    if max_offset == 0 {
        return;
    }
    let mut scrollbar_state = ScrollbarState::new(usize::from(max_offset))
        .position(usize::from(scroll.offset()))
        .viewport_content_length(usize::from(scroll.viewport_height()));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme.roles().scrollbar_thumb))
        .track_style(Style::default().fg(theme.roles().scrollbar_track));
    frame.render_stateful_widget(scrollbar, area.inner(Margin::new(0, 1)), &mut scrollbar_state);
}
