//! Component abstraction shared by every piece of the page.
//!
//! Components own only local UI behaviour. They read and mutate `App` state,
//! render into the `Rect` they are given, and report side effects back to the
//! runtime as `Effect`s instead of performing I/O themselves.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};
use reelflow_types::{Effect, Msg};

use crate::app::App;

pub(crate) trait Component {
    /// Handle an application-level message after `App::update` has applied it.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key press routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Draw into `area`. Rendering may record layout (hit areas, scroll
    /// bounds) on `app` but must not change what the user sees next frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);

    /// Keyboard hints shown in the bottom bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
