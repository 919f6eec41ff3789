//! Shared types for the reelflow page: the static workflow document, the
//! page copy, and the message/effect vocabulary used by the TUI.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod guide;
pub mod workflow;

pub use workflow::{REFERENCE_WORKFLOW, WorkflowDocument, WorkflowStep, WorkflowTrigger};

/// The two mutually exclusive views of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Stage cards plus the JSON viewer.
    #[default]
    Workflow,
    /// Prerequisites, setup guides, and reference grids.
    Instructions,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Workflow, Tab::Instructions];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Workflow => "Workflow",
            Tab::Instructions => "Instructions",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Workflow => 0,
            Tab::Instructions => 1,
        }
    }

    /// The other tab; with two tabs, next and previous coincide.
    pub fn toggled(self) -> Tab {
        match self {
            Tab::Workflow => Tab::Instructions,
            Tab::Instructions => Tab::Workflow,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Workflow => f.write_str("workflow"),
            Tab::Instructions => f.write_str("instructions"),
        }
    }
}

/// Raised when a tab name from the command line, environment, or settings file is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab '{0}' (expected 'workflow' or 'instructions')")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "workflow" => Ok(Tab::Workflow),
            "instructions" => Ok(Tab::Instructions),
            _ => Err(UnknownTab(value.to_string())),
        }
    }
}

/// Messages that update application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Terminal size changed.
    Resize(u16, u16),
    /// Show the given tab.
    SelectTab(Tab),
    /// The clipboard accepted the workflow JSON.
    ClipboardWritten,
    /// The clipboard rejected the write; carries a printable reason.
    ClipboardFailed(String),
    /// The copy-confirmation deadline elapsed.
    CopyConfirmationExpired,
    /// Advance to the next color theme for this session.
    CycleTheme,
}

/// Side effects requested by components and carried out by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the given text to the system clipboard.
    CopyToClipboardRequested(String),
    /// Leave the event loop and restore the terminal.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_defaults_to_workflow() {
        assert_eq!(Tab::default(), Tab::Workflow);
    }

    #[test]
    fn tab_parses_case_insensitively() {
        assert_eq!("Instructions".parse::<Tab>(), Ok(Tab::Instructions));
        assert_eq!(" workflow ".parse::<Tab>(), Ok(Tab::Workflow));
        assert_eq!("settings".parse::<Tab>(), Err(UnknownTab("settings".to_string())));
    }

    #[test]
    fn tab_display_round_trips_through_from_str() {
        for tab in Tab::ALL {
            assert_eq!(tab.to_string().parse::<Tab>(), Ok(tab));
        }
    }

    #[test]
    fn toggled_alternates_between_the_two_tabs() {
        assert_eq!(Tab::Workflow.toggled(), Tab::Instructions);
        assert_eq!(Tab::Workflow.toggled().toggled(), Tab::Workflow);
    }

    #[test]
    fn tab_deserializes_from_lowercase_names() {
        let tab: Tab = serde_json::from_str("\"instructions\"").expect("tab");
        assert_eq!(tab, Tab::Instructions);
    }
}
