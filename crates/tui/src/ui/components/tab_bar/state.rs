use ratatui::layout::{Position, Rect};
use reelflow_types::Tab;

/// Selected tab plus the hit areas recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct TabBarState {
    active: Tab,
    /// Clickable region of each tab title.
    pub per_tab_areas: Vec<(Tab, Rect)>,
}

impl TabBarState {
    pub fn new(initial: Tab) -> Self {
        Self {
            active: initial,
            per_tab_areas: Vec::new(),
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Makes `tab` active. Returns `true` when the selection changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    /// Tab whose title covers the given cell, if any.
    pub fn tab_at(&self, column: u16, row: u16) -> Option<Tab> {
        let position = Position::new(column, row);
        self.per_tab_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(tab, _)| *tab)
    }
}
