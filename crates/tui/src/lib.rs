//! # Reelflow TUI
//!
//! Terminal rendering of the YouTube → TikTok automation page: a header, a
//! two-tab switcher, the workflow tab (stage overview plus the Pabbly Connect
//! workflow JSON with a copy button) and the setup instructions tab.
//!
//! ## Architecture
//!
//! Components handle input and render themselves against shared `App`
//! state. They never perform I/O; instead they return `Effect`s which the
//! runtime turns into commands (clipboard writes) whose outcomes come back
//! as `Msg`s.

mod app;
mod cmd;
mod ui;

use anyhow::Result;
use reelflow_util::Settings;

/// Runs the page until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or the
/// alternate screen, or if drawing fails.
pub async fn run(settings: Settings) -> Result<()> {
    ui::runtime::run_app(settings).await
}
