use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use reelflow_types::{Effect, guide::PIPELINE_STAGES};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::common::{highlight_json, render_vertical_scrollbar};
use crate::ui::theme::{Theme, theme_helpers as th};

/// Below this width the stage cards stack above the JSON viewer.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 110;
/// Mouse wheel step in rows.
const WHEEL_STEP: i32 = 3;

/// Workflow tab: stage cards beside a syntax-highlighted JSON viewer with a
/// copy button.
#[derive(Debug, Default)]
pub struct WorkflowComponent;

impl WorkflowComponent {
    /// The request to copy the document text to the clipboard.
    pub fn copy_request(app: &App) -> Effect {
        Effect::CopyToClipboardRequested(app.ctx.document_json.clone())
    }

    fn copy_button_label(app: &App) -> (&'static str, Style) {
        let theme = &*app.ctx.theme;
        if app.workflow.copy.is_copied() {
            (" ✓ Copied! ", th::badge_style(theme))
        } else if app.workflow.copy_error.is_some() {
            (" ✗ Copy failed ", theme.status_error().add_modifier(Modifier::BOLD))
        } else {
            (" ⧉ Copy JSON ", th::button_primary_style(theme))
        }
    }

    fn stage_lines(theme: &dyn Theme, compact: bool) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (index, stage) in PIPELINE_STAGES.iter().enumerate() {
            let accent = theme.stage_accent(index);
            let number = Span::styled(
                format!(" {} ", stage.number),
                Style::default()
                    .bg(accent)
                    .fg(theme.roles().background)
                    .add_modifier(Modifier::BOLD),
            );
            let title = Span::styled(format!(" {}", stage.title), theme.heading_style());
            if compact {
                lines.push(Line::from(vec![
                    number,
                    title,
                    Span::styled(format!("  {}", stage.tool), theme.text_muted_style()),
                ]));
                continue;
            }
            let bar = Span::styled("▌ ", Style::default().fg(accent));
            lines.push(Line::from(vec![bar.clone(), number, title]));
            lines.push(Line::from(vec![
                bar.clone(),
                Span::styled(stage.summary, theme.text_secondary_style()),
            ]));
            lines.push(Line::from(vec![
                bar,
                Span::styled(
                    format!(" {} ", stage.tool),
                    Style::default().bg(theme.roles().surface_muted).fg(theme.roles().text),
                ),
            ]));
            lines.push(Line::default());
        }
        lines
    }

    fn render_stages(frame: &mut Frame, area: Rect, app: &App, compact: bool) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Workflow Steps"));
        let paragraph = Paragraph::new(Self::stage_lines(theme, compact))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_json(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let (label, label_style) = Self::copy_button_label(app);
        let mut block = th::block(theme, Some("Workflow JSON"))
            .title_top(Line::from(Span::styled(label, label_style)).right_aligned());
        block = match app.workflow.copy_error.as_deref() {
            Some(reason) => block.title_bottom(Line::from(Span::styled(format!(" {reason} "), theme.status_error()))),
            None => {
                let document = app.ctx.document;
                let summary = format!(" {} · {} steps ", document.workflow_name, document.steps.len());
                block.title_bottom(Line::from(Span::styled(summary, theme.text_muted_style())).right_aligned())
            }
        };

        let inner = block.inner(area);
        let paragraph = Paragraph::new(highlight_json(&app.ctx.document_json, theme)).wrap(Wrap { trim: false });
        let content_height = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
        app.workflow.json_scroll.set_bounds(content_height, inner.height);
        let offset = app.workflow.json_scroll.offset();

        frame.render_widget(paragraph.block(block).scroll((offset, 0)), area);

        render_vertical_scrollbar(frame, area, theme, &app.workflow.json_scroll);

        let label_width = Line::from(label).width() as u16;
        app.workflow.copy_button_area = Rect::new(
            area.right().saturating_sub(1 + label_width).max(area.x),
            area.y,
            label_width.min(area.width),
            area.height.min(1),
        );
        app.workflow.json_area = area;
    }
}

impl Component for WorkflowComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('y')) {
            return vec![Self::copy_request(app)];
        }
        let scroll = &mut app.workflow.json_scroll;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => scroll.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => scroll.scroll_by(-1),
            KeyCode::PageDown => scroll.page(1),
            KeyCode::PageUp => scroll.page(-1),
            KeyCode::Home => scroll.to_top(),
            KeyCode::End => scroll.to_bottom(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if app.workflow.copy_button_area.contains(position) => {
                vec![Self::copy_request(app)]
            }
            MouseEventKind::ScrollDown if app.workflow.json_area.contains(position) => {
                app.workflow.json_scroll.scroll_by(WHEEL_STEP);
                Vec::new()
            }
            MouseEventKind::ScrollUp if app.workflow.json_area.contains(position) => {
                app.workflow.json_scroll.scroll_by(-WHEEL_STEP);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            let [stages, json] = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
            Self::render_stages(frame, stages, app, false);
            Self::render_json(frame, json, app);
        } else {
            let stage_rows = PIPELINE_STAGES.len() as u16 + 2;
            let [stages, json] = Layout::vertical([Constraint::Length(stage_rows), Constraint::Min(0)]).areas(area);
            Self::render_stages(frame, stages, app, true);
            Self::render_json(frame, json, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" c/y", " Copy "), ("↑/↓/PgUp/PgDn", " Scroll ")],
        )
    }
}
