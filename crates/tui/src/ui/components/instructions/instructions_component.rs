//! Instructions tab: prerequisites, numbered setup guides, the free tool
//! roster and recommended posting times, rendered as one scrollable page.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use reelflow_types::{
    Effect,
    guide::{
        ExternalLink, FREE_TOOLS, FREE_TOOLS_TITLE, GuideItem, INSTRUCTIONS_TITLE, POSTING_TIMES, POSTING_TIMES_TITLE,
        PREREQUISITES, PREREQUISITES_TITLE, SETUP_GUIDES, SETUP_STEPS_TITLE, SetupGuide,
    },
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::common::render_vertical_scrollbar;
use crate::ui::theme::{Theme, theme_helpers as th};
use crate::ui::utils::{column_widths, fit_to_width};

const WHEEL_STEP: i32 = 3;
const GRID_GAP: u16 = 2;
/// Minimum content width for the two-column free-tools grid.
const TOOLS_TWO_COLUMN_MIN_WIDTH: u16 = 60;
/// Minimum content width for the four-column posting-times grid.
const TIMES_FOUR_COLUMN_MIN_WIDTH: u16 = 80;

#[derive(Debug, Default)]
pub struct InstructionsComponent;

impl InstructionsComponent {
    fn link_spans(theme: &dyn Theme, link: ExternalLink) -> Vec<Span<'static>> {
        vec![
            Span::styled(link.label, theme.link_style()),
            Span::styled(" ↗ ", theme.text_muted_style()),
            Span::styled(link.url, theme.text_muted_style().add_modifier(Modifier::UNDERLINED)),
        ]
    }

    fn section_heading(theme: &dyn Theme, title: &'static str) -> Line<'static> {
        Line::from(Span::styled(title, theme.heading_style()))
    }

    fn prerequisite_lines(theme: &dyn Theme) -> Vec<Line<'static>> {
        let mut lines = vec![Self::section_heading(theme, PREREQUISITES_TITLE)];
        lines.extend(PREREQUISITES.iter().map(|entry| {
            Line::from(vec![
                Span::styled("  ✓ ", theme.status_success()),
                Span::styled(*entry, theme.text_primary_style()),
            ])
        }));
        lines
    }

    fn guide_lines(theme: &dyn Theme, guide: &SetupGuide) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(format!(" {} ", guide.number), th::badge_style(theme)),
            Span::styled(format!(" {}", guide.title), theme.heading_style()),
        ])];

        for (index, item) in guide.items.iter().enumerate() {
            let mut spans = vec![Span::styled(format!("  {}. ", index + 1), theme.text_muted_style())];
            match item {
                GuideItem::Text(text) => spans.push(Span::styled(*text, theme.text_primary_style())),
                GuideItem::Link { lead, link } => {
                    spans.push(Span::styled(format!("{lead} "), theme.text_primary_style()));
                    spans.extend(Self::link_spans(theme, *link));
                }
            }
            lines.push(Line::from(spans));
        }

        for note in guide.notes {
            lines.push(Line::from(Span::styled(
                format!("  {}", note.title),
                theme.accent_primary_style().add_modifier(Modifier::BOLD),
            )));
            lines.extend(note.entries.iter().map(|entry| {
                Line::from(vec![
                    Span::styled("    • ", theme.text_muted_style()),
                    Span::styled(*entry, theme.text_secondary_style()),
                ])
            }));
        }
        lines
    }

    /// Lays `cells` out in rows of `columns`; each cell is a fixed list of
    /// styled fragments, one per output line.
    fn grid_lines(cells: &[Vec<(String, Style)>], columns: u16, width: u16) -> Vec<Line<'static>> {
        let widths = column_widths(width, columns, GRID_GAP);
        let gap = " ".repeat(usize::from(GRID_GAP));
        let mut lines = Vec::new();
        for row in cells.chunks(widths.len()) {
            let height = row.iter().map(Vec::len).max().unwrap_or(0);
            for line_index in 0..height {
                let mut spans = Vec::new();
                for (column, cell) in row.iter().enumerate() {
                    if column > 0 {
                        spans.push(Span::raw(gap.clone()));
                    }
                    let (text, style) = cell.get(line_index).cloned().unwrap_or_default();
                    spans.push(Span::styled(fit_to_width(&text, widths[column]), style));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::default());
        }
        lines
    }

    fn free_tool_lines(theme: &dyn Theme, width: u16) -> Vec<Line<'static>> {
        let columns = if width >= TOOLS_TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let cells: Vec<Vec<(String, Style)>> = FREE_TOOLS
            .iter()
            .map(|tool| {
                vec![
                    (tool.name.to_string(), theme.heading_style()),
                    (tool.description.to_string(), theme.text_secondary_style()),
                    (format!("{} ↗ {}", tool.link.label, tool.link.url), theme.link_style()),
                ]
            })
            .collect();
        let mut lines = vec![Self::section_heading(theme, FREE_TOOLS_TITLE)];
        lines.extend(Self::grid_lines(&cells, columns, width));
        lines
    }

    fn posting_time_lines(theme: &dyn Theme, width: u16) -> Vec<Line<'static>> {
        let columns = if width >= TIMES_FOUR_COLUMN_MIN_WIDTH { 4 } else { 2 };
        let cells: Vec<Vec<(String, Style)>> = POSTING_TIMES
            .iter()
            .map(|slot| {
                vec![
                    (slot.time.to_string(), theme.accent_emphasis_style()),
                    (slot.label.to_string(), theme.text_muted_style()),
                ]
            })
            .collect();
        let mut lines = vec![Self::section_heading(theme, POSTING_TIMES_TITLE)];
        lines.extend(Self::grid_lines(&cells, columns, width));
        lines
    }

    /// Every line of the page for a content area `width` cells wide.
    pub(crate) fn page_lines(theme: &dyn Theme, width: u16) -> Vec<Line<'static>> {
        let mut lines = Self::prerequisite_lines(theme);
        lines.push(Line::default());
        lines.push(Self::section_heading(theme, SETUP_STEPS_TITLE));
        for guide in SETUP_GUIDES {
            lines.extend(Self::guide_lines(theme, guide));
            lines.push(Line::default());
        }
        lines.extend(Self::free_tool_lines(theme, width));
        lines.extend(Self::posting_time_lines(theme, width));
        lines
    }
}

impl Component for InstructionsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let scroll = &mut app.instructions.scroll;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => scroll.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => scroll.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => scroll.page(1),
            KeyCode::PageUp => scroll.page(-1),
            KeyCode::Home => scroll.to_top(),
            KeyCode::End => scroll.to_bottom(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if !app.instructions.area.contains(Position::new(mouse.column, mouse.row)) {
            return Vec::new();
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => app.instructions.scroll.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => app.instructions.scroll.scroll_by(-WHEEL_STEP),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(INSTRUCTIONS_TITLE));
        let inner = block.inner(area);
        // Leave the rightmost column for the scrollbar.
        let content_width = inner.width.saturating_sub(1);

        let paragraph = Paragraph::new(Self::page_lines(theme, content_width)).wrap(Wrap { trim: false });
        let content_height = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
        app.instructions.scroll.set_bounds(content_height, inner.height);

        frame.render_widget(paragraph.block(block).scroll((app.instructions.scroll.offset(), 0)), area);
        render_vertical_scrollbar(frame, area, theme, &app.instructions.scroll);
        app.instructions.area = area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓/PgUp/PgDn", " Scroll "), ("Home/End", " Jump ")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::OrchidTheme;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn page_lists_every_prerequisite_and_guide() {
        let text = plain(&InstructionsComponent::page_lines(&OrchidTheme::new(), 100)).join("\n");
        for entry in PREREQUISITES {
            assert!(text.contains(entry), "missing prerequisite {entry}");
        }
        for guide in SETUP_GUIDES {
            assert!(text.contains(guide.title), "missing guide {}", guide.title);
        }
        assert!(text.contains("console.cloud.google.com"));
    }

    #[test]
    fn section_headings_follow_the_page_copy() {
        let lines = plain(&InstructionsComponent::page_lines(&OrchidTheme::new(), 100));
        let headings: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|line| {
                [PREREQUISITES_TITLE, SETUP_STEPS_TITLE, FREE_TOOLS_TITLE, POSTING_TIMES_TITLE].contains(line)
            })
            .collect();
        assert_eq!(
            headings,
            vec!["Prerequisites", "Setup Steps", "Free Tools Used", "Best TikTok Posting Times (USA)"]
        );
        assert!(!lines.iter().any(|line| line.contains("100% Free Tools Used")));
    }

    #[test]
    fn posting_times_use_four_columns_on_wide_screens() {
        let lines = plain(&InstructionsComponent::page_lines(&OrchidTheme::new(), 100));
        let row = lines
            .iter()
            .find(|line| line.contains("9:00 AM EST"))
            .expect("posting time row");
        assert!(row.contains("7:00 PM EST"));
    }

    #[test]
    fn posting_times_use_two_columns_on_narrow_screens() {
        let lines = plain(&InstructionsComponent::page_lines(&OrchidTheme::new(), 50));
        let row = lines
            .iter()
            .find(|line| line.contains("9:00 AM EST"))
            .expect("posting time row");
        assert!(row.contains("12:00 PM EST"));
        assert!(!row.contains("5:00 PM EST"));
    }

    #[test]
    fn free_tools_collapse_to_one_column_when_narrow() {
        let lines = plain(&InstructionsComponent::page_lines(&OrchidTheme::new(), 40));
        let row = lines.iter().find(|line| line.contains("cobalt.tools")).expect("tool row");
        assert!(!row.contains("Hugging Face"));
    }

    #[test]
    fn grid_rows_never_exceed_the_content_width() {
        for width in [40u16, 59, 60, 79, 80, 120] {
            let lines = InstructionsComponent::free_tool_lines(&OrchidTheme::new(), width);
            assert!(lines.iter().all(|line| line.width() <= usize::from(width)), "overflow at {width}");
        }
    }
}
