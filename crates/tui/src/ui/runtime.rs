//! Runtime: terminal lifecycle and the event loop.
//!
//! - A dedicated blocking task reads `crossterm` events and forwards them over
//!   a channel.
//! - The loop waits on input, the copy-confirmation deadline, and Ctrl+C.
//!   The deadline is re-read from `App` on every iteration, so a newer copy
//!   replaces the pending wake-up instead of adding a second one.
//! - Effects returned by components go through `cmd`; their outcomes come
//!   back as messages.
//! - A frame is drawn after every handled event or deadline; ignored input
//!   (key releases, focus changes, pastes) skips the redraw.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use reelflow_types::{Effect, Msg};
use reelflow_util::Settings;
use std::time::Duration;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, Instant},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::cmd::{self, ClipboardWriter, SystemClipboard};
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Spawn a blocking reader that forwards terminal events over a channel.
///
/// The reader stops when the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    tokio::task::spawn_blocking(move || {
        loop {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                }
                Ok(true) => match event::read() {
                    Ok(event) => {
                        // Mouse motion is never used; skip it rather than redraw.
                        if event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved) {
                            continue;
                        }
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("Failed to read event: {}", error);
                        break;
                    }
                },
                Err(error) => {
                    warn!("Failed to poll events: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, main_view: &mut MainView) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Routes one terminal event. Returns `None` when the page ignores it.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Option<Vec<Effect>> {
    match input_event {
        // Key releases and repeats are reported on some platforms; act on presses only.
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            Some(main_view.handle_key_events(app, key_event))
        }
        Event::Mouse(mouse_event) => Some(main_view.handle_mouse_events(app, mouse_event)),
        Event::Resize(width, height) => Some(main_view.handle_message(app, Msg::Resize(width, height))),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}

/// Sleeps until `deadline`, or forever when there is none.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Whether the loop should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Carries out effects until none remain. Each clipboard outcome is fed back
/// through the main view, which may request further effects.
fn process_effects(
    app: &mut App,
    main_view: &mut MainView,
    clipboard: &mut dyn ClipboardWriter,
    mut effects: Vec<Effect>,
) -> Flow {
    while !effects.is_empty() {
        if effects.contains(&Effect::Quit) {
            return Flow::Exit;
        }
        let messages = cmd::run_cmds(clipboard, cmd::from_effects(std::mem::take(&mut effects)));
        for msg in messages {
            effects.extend(main_view.handle_message(app, msg));
        }
    }
    Flow::Continue
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal on exit.
pub async fn run_app(settings: Settings) -> Result<()> {
    let mut app = App::new(&settings)?;
    let mut main_view = MainView::new();
    let mut clipboard = SystemClipboard::default();

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut clipboard, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    info!("page closed");
    outcome
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    clipboard: &mut dyn ClipboardWriter,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    render(terminal, app, main_view)?;

    loop {
        let mut effects = Vec::new();
        let mut redraw = true;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                match handle_input_event(app, main_view, event) {
                    Some(handled) => effects.extend(handled),
                    None => redraw = false,
                }
            }
            _ = wait_until(app.workflow.copy.deadline()) => {
                effects.extend(main_view.handle_message(app, Msg::CopyConfirmationExpired));
            }
            _ = signal::ctrl_c() => { break; }
        }

        if process_effects(app, main_view, clipboard, effects) == Flow::Exit {
            break;
        }
        if redraw {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    use super::*;
    use crate::cmd::tests::{FailingClipboard, RecordingClipboard};
    use crate::ui::components::workflow::state::COPY_CONFIRMATION_WINDOW;
    use ratatui::backend::TestBackend;

    #[tokio::test(start_paused = true)]
    async fn wait_until_wakes_at_the_deadline() {
        let start = Instant::now();
        wait_until(Some(start + COPY_CONFIRMATION_WINDOW)).await;
        assert_eq!(Instant::now() - start, COPY_CONFIRMATION_WINDOW);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_until_without_deadline_never_fires() {
        let outcome = time::timeout(Duration::from_secs(60), wait_until(None)).await;
        assert!(outcome.is_err());
    }

    fn key_event(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn ignored_input_is_reported_as_unhandled() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();

        let release = key_event(KeyCode::Char('2'), KeyEventKind::Release);
        assert_eq!(handle_input_event(&mut app, &mut view, release), None);
        assert_eq!(app.active_tab(), reelflow_types::Tab::Workflow);
        assert_eq!(handle_input_event(&mut app, &mut view, Event::FocusLost), None);
        assert_eq!(handle_input_event(&mut app, &mut view, Event::Paste("text".into())), None);

        let press = key_event(KeyCode::Char('2'), KeyEventKind::Press);
        assert_eq!(handle_input_event(&mut app, &mut view, press), Some(Vec::new()));
        assert_eq!(app.active_tab(), reelflow_types::Tab::Instructions);
        assert_eq!(handle_input_event(&mut app, &mut view, Event::Resize(80, 24)), Some(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn copy_effect_runs_through_the_clipboard() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();
        let mut clipboard = RecordingClipboard::default();

        let effects = vec![Effect::CopyToClipboardRequested(app.ctx.document_json.clone())];
        assert_eq!(process_effects(&mut app, &mut view, &mut clipboard, effects), Flow::Continue);
        assert_eq!(clipboard.writes, vec![app.ctx.document_json.clone()]);
        assert!(app.workflow.copy.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn quit_effect_stops_the_loop() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();
        assert_eq!(
            process_effects(&mut app, &mut view, &mut FailingClipboard, vec![Effect::Quit]),
            Flow::Exit
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failed_copy_renders_the_failure_label() {
        let mut app = App::new(&Settings::default()).expect("app");
        let mut view = MainView::new();
        let effects = vec![Effect::CopyToClipboardRequested(app.ctx.document_json.clone())];
        process_effects(&mut app, &mut view, &mut FailingClipboard, effects);

        let mut terminal = Terminal::new(TestBackend::new(140, 48)).expect("terminal");
        render(&mut terminal, &mut app, &mut view).expect("render");
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Copy failed"));
    }
}
