use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use reelflow_types::{
    Effect, Msg, Tab,
    guide::{PAGE_BADGE, PAGE_FOOTER, PAGE_SUBTITLE, PAGE_TITLE},
};

use super::components::{Component, InstructionsComponent, TabBarComponent, WorkflowComponent};
use super::theme::theme_helpers as th;
use crate::app::App;

/// Page shell: header, tab bar, the active panel, footer and hints.
///
/// Global keys (quit, tab switching, theme cycling) are handled here; all
/// other input goes to the panel of the active tab.
#[derive(Debug, Default)]
pub struct MainView {
    tab_bar_view: TabBarComponent,
    workflow_view: WorkflowComponent,
    instructions_view: InstructionsComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    fn active_panel(&mut self, tab: Tab) -> &mut dyn Component {
        match tab {
            Tab::Workflow => &mut self.workflow_view,
            Tab::Instructions => &mut self.instructions_view,
        }
    }

    fn active_panel_ref(&self, tab: Tab) -> &dyn Component {
        match tab {
            Tab::Workflow => &self.workflow_view,
            Tab::Instructions => &self.instructions_view,
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let lines = vec![
            Line::from(Span::styled(PAGE_TITLE, theme.heading_style())).centered(),
            Line::from(Span::styled(PAGE_SUBTITLE, theme.text_secondary_style())).centered(),
            Line::from(Span::styled(format!(" ✓ {PAGE_BADGE} "), th::badge_style(theme))).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn get_preferred_layout(area: Rect) -> [Rect; 5] {
        Layout::vertical([
            Constraint::Length(4), // Title, subtitle, badge, spacer
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Active panel
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Hints
        ])
        .areas(area)
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        let tab = app.active_tab();
        effects.extend(self.active_panel(tab).handle_message(app, msg));
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => vec![Effect::Quit],
                KeyCode::Char('t') => self.handle_message(app, Msg::CycleTheme),
                _ => Vec::new(),
            };
        }

        let target = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return vec![Effect::Quit],
            KeyCode::Char('1') => Some(Tab::Workflow),
            KeyCode::Char('2') => Some(Tab::Instructions),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => Some(app.active_tab().toggled()),
            _ => None,
        };
        if let Some(tab) = target {
            return self.handle_message(app, Msg::SelectTab(tab));
        }

        let tab = app.active_tab();
        self.active_panel(tab).handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.tab_bar_view.handle_mouse_events(app, mouse);
        let tab = app.active_tab();
        effects.extend(self.active_panel(tab).handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background with the theme's background color.
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let [header, tabs, content, footer, hints] = Self::get_preferred_layout(area);
        Self::render_header(frame, header, app);
        self.tab_bar_view.render(frame, tabs, app);
        let tab = app.active_tab();
        self.active_panel(tab).render(frame, content, app);

        let footer_line = Line::from(Span::styled(PAGE_FOOTER, app.ctx.theme.text_muted_style())).centered();
        frame.render_widget(Paragraph::new(footer_line), footer);

        let hint_widget = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hint_widget, hints);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let mut hint_spans = vec![Span::styled("Hints:", app.ctx.theme.text_muted_style())];
        hint_spans.extend(self.tab_bar_view.get_hint_spans(app));
        hint_spans.extend(self.active_panel_ref(app.active_tab()).get_hint_spans(app));
        hint_spans.extend(th::build_hint_spans(
            &*app.ctx.theme,
            &[("Ctrl+T", " Theme "), ("q", " Quit ")],
        ));
        hint_spans
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use reelflow_util::Settings;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn draw(view: &mut MainView, app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|frame| view.render(frame, frame.area(), app))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test(start_paused = true)]
    async fn number_keys_and_tab_switch_panels() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();

        view.handle_key_events(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.active_tab(), Tab::Instructions);
        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_tab(), Tab::Workflow);
        view.handle_key_events(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.active_tab(), Tab::Workflow);
    }

    #[tokio::test(start_paused = true)]
    async fn returning_to_the_workflow_tab_replaces_the_instructions_panel() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();

        view.handle_key_events(&mut app, key(KeyCode::Char('2')));
        let text = buffer_text(&draw(&mut view, &mut app, 140, 48));
        assert!(text.contains("Step-by-Step Setup Instructions"));
        assert!(text.contains("Prerequisites"));

        view.handle_key_events(&mut app, key(KeyCode::Char('1')));
        let text = buffer_text(&draw(&mut view, &mut app, 140, 48));
        assert!(text.contains("Workflow JSON"));
        assert!(text.contains("Copy JSON"));
        assert!(!text.contains("Prerequisites"));
        assert!(!text.contains("Step-by-Step Setup Instructions"));
    }

    #[tokio::test(start_paused = true)]
    async fn quit_keys_request_quit() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Esc)), vec![Effect::Quit]);
    }

    #[tokio::test(start_paused = true)]
    async fn copy_key_only_applies_on_the_workflow_tab() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();

        let effects = view.handle_key_events(&mut app, key(KeyCode::Char('c')));
        assert_eq!(effects, vec![Effect::CopyToClipboardRequested(app.ctx.document_json.clone())]);

        view.handle_key_events(&mut app, key(KeyCode::Char('2')));
        assert!(view.handle_key_events(&mut app, key(KeyCode::Char('c'))).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn workflow_tab_renders_stages_json_and_copy_button() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();
        let text = buffer_text(&draw(&mut view, &mut app, 140, 48));

        assert!(text.contains(PAGE_TITLE));
        assert!(text.contains("Workflow JSON"));
        assert!(text.contains("Copy JSON"));
        assert!(text.contains("\"workflow_name\""));
        assert!(text.contains(PAGE_FOOTER));
    }

    #[tokio::test(start_paused = true)]
    async fn clicking_the_copy_button_requests_a_copy() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();
        draw(&mut view, &mut app, 140, 48);

        let button = app.workflow.copy_button_area;
        assert!(button.width > 0);
        let effects = view.handle_mouse_events(&mut app, click(button.x + 1, button.y));
        assert_eq!(effects, vec![Effect::CopyToClipboardRequested(app.ctx.document_json.clone())]);
    }

    #[tokio::test(start_paused = true)]
    async fn copied_label_shows_while_confirmed() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();
        view.handle_message(&mut app, Msg::ClipboardWritten);
        let text = buffer_text(&draw(&mut view, &mut app, 140, 48));
        assert!(text.contains("Copied!"));
        assert!(!text.contains("Copy JSON"));
    }

    #[tokio::test(start_paused = true)]
    async fn clicking_a_tab_title_switches_tabs() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();
        draw(&mut view, &mut app, 100, 40);

        let (_, instructions_area) = app
            .tab_bar
            .per_tab_areas
            .iter()
            .copied()
            .find(|(tab, _)| *tab == Tab::Instructions)
            .expect("instructions tab area");
        view.handle_mouse_events(&mut app, click(instructions_area.x, instructions_area.y));
        assert_eq!(app.active_tab(), Tab::Instructions);

        let text = buffer_text(&draw(&mut view, &mut app, 100, 40));
        assert!(text.contains("Prerequisites"));
        assert!(!text.contains("Workflow JSON"));
    }
}
