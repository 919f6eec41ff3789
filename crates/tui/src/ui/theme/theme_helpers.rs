use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Tabs},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &T, title: Option<&'a str>) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .style(panel_style(theme))
        .padding(Padding::horizontal(1));
    if let Some(t) = title {
        block = block.title(Span::styled(
            format!(" {t} "),
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Build tabs with active/inactive styles.
pub fn tabs<'a, T: Theme + ?Sized>(theme: &T, titles: Vec<Line<'a>>, index: usize) -> Tabs<'a> {
    Tabs::new(titles)
        .select(index)
        .highlight_style(theme.selection_style().add_modifier(Modifier::BOLD))
        .style(theme.text_secondary_style())
        .divider(Span::styled("│", theme.text_muted_style()))
        .padding(" ", " ")
}

/// Filled accent style for the primary call to action.
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { selection_bg, text, .. } = *theme.roles();
    Style::default().bg(selection_bg).fg(text).add_modifier(Modifier::BOLD)
}

/// Badge/tag style used for the header pill and step numbers.
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { success, background, .. } = *theme.roles();
    Style::default().bg(success).fg(background).add_modifier(Modifier::BOLD)
}

/// Interleaves `(key, description)` pairs into accent/muted spans.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(*key, theme.accent_emphasis_style()),
                Span::styled(*description, theme.text_muted_style()),
            ]
        })
        .collect()
}
