//! # Command Execution Layer
//!
//! Translates application [`Effect`]s into imperative [`Cmd`]s and executes
//! them. This is the only place the TUI touches the system clipboard.
//!
//! - [`from_effects`] maps effects to commands.
//! - [`run_cmds`] executes commands and reports each outcome back as a
//!   [`Msg`] so state changes still flow through `App::update`.

use reelflow_types::{Effect, Msg};
use thiserror::Error;
use tracing::{debug, warn};

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write text into the system clipboard.
    ClipboardSet(String),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Destination for clipboard writes.
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard.
///
/// The handle is opened on first use and kept for the life of the session;
/// on X11 the copied text is served by this handle, so dropping it right
/// after a write can lose the contents.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        // A handle that failed a write is dropped and reopened on the next attempt.
        clipboard.set_text(text)?;
        self.inner = Some(clipboard);
        Ok(())
    }
}

/// Convert application [`Effect`]s into [`Cmd`]s. `Quit` is handled by the
/// runtime and produces no command.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::CopyToClipboardRequested(text) => Some(Cmd::ClipboardSet(text)),
            Effect::Quit => None,
        })
        .collect()
}

/// Execute commands, returning one message per outcome.
pub fn run_cmds(clipboard: &mut dyn ClipboardWriter, commands: Vec<Cmd>) -> Vec<Msg> {
    commands
        .into_iter()
        .map(|command| match command {
            Cmd::ClipboardSet(text) => execute_clipboard_set(clipboard, &text),
        })
        .collect()
}

fn execute_clipboard_set(clipboard: &mut dyn ClipboardWriter, text: &str) -> Msg {
    match clipboard.set_text(text) {
        Ok(()) => {
            debug!(bytes = text.len(), "clipboard write succeeded");
            Msg::ClipboardWritten
        }
        Err(error) => {
            warn!(%error, "clipboard write failed");
            Msg::ClipboardFailed(error.to_string())
        }
    }
}
