//! Application state and the message-driven update loop.
//!
//! `App` holds everything the page shows: the active tab, the workflow tab's
//! copy-confirmation pulse and scroll positions, and the shared context
//! (theme plus the serialized workflow document). State changes only through
//! [`App::update`], which applies a [`Msg`] and returns follow-up [`Effect`]s.

use anyhow::Result;
use reelflow_types::{Effect, Msg, REFERENCE_WORKFLOW, Tab, WorkflowDocument};
use reelflow_util::Settings;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::ui::components::instructions::InstructionsViewState;
use crate::ui::components::tab_bar::TabBarState;
use crate::ui::components::workflow::WorkflowViewState;
use crate::ui::theme::{self, LoadedTheme, Theme, catalog};

/// Cross-cutting state shared by every component.
pub struct SharedCtx {
    /// Active theme for rendering.
    pub theme: Box<dyn Theme>,
    /// Catalog id of the active theme.
    pub theme_id: &'static str,
    /// Theme cycling stays within ANSI palettes.
    pub ansi_only: bool,
    /// The workflow shown on the page.
    pub document: &'static WorkflowDocument,
    /// `document` as 2-space-indented JSON; exactly what the copy button writes.
    pub document_json: String,
}

impl SharedCtx {
    pub fn new(theme: LoadedTheme, document: &'static WorkflowDocument) -> Result<Self> {
        let document_json = document.to_pretty_json()?;
        Ok(Self {
            theme: theme.theme,
            theme_id: theme.definition.id,
            ansi_only: theme.ansi_only,
            document,
            document_json,
        })
    }
}

pub struct App {
    pub ctx: SharedCtx,
    pub tab_bar: TabBarState,
    pub workflow: WorkflowViewState,
    pub instructions: InstructionsViewState,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        let theme = theme::load(settings.theme.as_deref());
        info!(theme = theme.definition.id, tab = %settings.initial_tab(), "starting page");
        Ok(Self {
            ctx: SharedCtx::new(theme, &REFERENCE_WORKFLOW)?,
            tab_bar: TabBarState::new(settings.initial_tab()),
            workflow: WorkflowViewState::default(),
            instructions: InstructionsViewState::default(),
        })
    }

    pub fn active_tab(&self) -> Tab {
        self.tab_bar.active()
    }

    /// Shows `tab`; selecting the tab already shown changes nothing.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab_bar.select(tab) {
            debug!(%tab, "tab selected");
        }
    }

    /// Apply a message to the state. Returns effects for the runtime to carry out.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Resize(_, _) => {
                // Layout is recomputed on the next render.
            }
            Msg::SelectTab(tab) => self.select_tab(*tab),
            Msg::ClipboardWritten => {
                self.workflow.record_copy_success(Instant::now());
                info!(bytes = self.ctx.document_json.len(), "workflow JSON copied to clipboard");
            }
            Msg::ClipboardFailed(reason) => {
                warn!(%reason, "copy failed");
                self.workflow.record_copy_failure(reason.clone());
            }
            Msg::CopyConfirmationExpired => {
                if self.workflow.copy.expire(Instant::now()) {
                    debug!("copy confirmation cleared");
                }
            }
            Msg::CycleTheme => {
                let next = catalog::next_after(self.ctx.theme_id, self.ctx.ansi_only);
                self.ctx.theme = next.build();
                self.ctx.theme_id = next.id;
                debug!(theme = next.id, label = next.label, "theme changed");
            }
        }
        Vec::new()
    }
}
