use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
};
use reelflow_types::{Effect, Msg, Tab};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

const TAB_PADDING: u16 = 1;
const DIVIDER_WIDTH: u16 = 1;

/// Centered two-way tab switcher.
///
/// Clicking a title emits `Msg::SelectTab`; keyboard switching is handled by
/// the main view so it works regardless of which panel is active.
#[derive(Debug, Default)]
pub struct TabBarComponent;

impl TabBarComponent {
    fn title(tab: Tab) -> String {
        format!("{} {}", tab.index() + 1, tab.title())
    }

    /// Lays out the tab titles centered in `area`, mirroring how `Tabs`
    /// places padding and dividers, and returns each tab's region.
    fn tab_areas(area: Rect) -> Vec<(Tab, Rect)> {
        let widths: Vec<u16> = Tab::ALL
            .iter()
            .map(|tab| Line::from(Self::title(*tab)).width() as u16 + 2 * TAB_PADDING)
            .collect();
        let total = widths.iter().sum::<u16>() + DIVIDER_WIDTH * (widths.len() as u16).saturating_sub(1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        let mut areas = Vec::with_capacity(widths.len());
        for (tab, width) in Tab::ALL.into_iter().zip(widths) {
            let width = width.min(area.right().saturating_sub(x));
            areas.push((tab, Rect::new(x, area.y, width, area.height.min(1))));
            x = x.saturating_add(width + DIVIDER_WIDTH);
        }
        areas
    }
}

impl Component for TabBarComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match app.tab_bar.tab_at(mouse.column, mouse.row) {
            Some(tab) => app.update(&Msg::SelectTab(tab)),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let areas = Self::tab_areas(inner);
        let Some(first) = areas.first().map(|(_, rect)| *rect) else {
            return;
        };
        let strip = Rect::new(first.x, inner.y, inner.right().saturating_sub(first.x), inner.height.min(1));
        let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(Span::raw(Self::title(*tab)))).collect();
        frame.render_widget(th::tabs(theme, titles, app.tab_bar.active().index()), strip);

        app.tab_bar.per_tab_areas = areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" 1/2", " Switch tab "), ("Tab/←/→", " Next tab ")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_areas_are_centered_and_separated_by_the_divider() {
        let areas = TabBarComponent::tab_areas(Rect::new(0, 0, 40, 1));
        // " 1 Workflow " = 12 cells, " 2 Instructions " = 16 cells, one divider.
        assert_eq!(areas[0], (Tab::Workflow, Rect::new(5, 0, 12, 1)));
        assert_eq!(areas[1], (Tab::Instructions, Rect::new(18, 0, 16, 1)));
    }

    #[test]
    fn tab_areas_are_clipped_to_narrow_areas() {
        let areas = TabBarComponent::tab_areas(Rect::new(0, 0, 20, 1));
        assert!(areas.iter().all(|(_, rect)| rect.right() <= 20));
    }
}
