//! Read-only settings for the reelflow TUI.
//!
//! Values are layered from lowest to highest precedence: built-in defaults,
//! the JSON settings file (`~/.config/reelflow/settings.json` on most
//! platforms), environment variables, and finally command-line flags applied
//! by the caller through [`Settings::with_overrides`]. Nothing is ever written
//! back to disk.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use reelflow_types::Tab;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::{app_config_dir, expand_tilde};

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "REELFLOW_SETTINGS_PATH";

/// Environment variable selecting the theme by id or alias.
pub const THEME_ENV: &str = "REELFLOW_THEME";

/// Environment variable selecting the tab shown at startup.
pub const TAB_ENV: &str = "REELFLOW_TAB";

/// Default filename for the JSON payload.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error surfaced when the settings file exists but cannot be read.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme id or alias; `None` lets the TUI pick from terminal capabilities.
    pub theme: Option<String>,
    /// Tab to show first; `None` means [`Tab::Workflow`].
    pub initial_tab: Option<Tab>,
}

impl Settings {
    /// Loads the settings file from its default location and applies environment overrides.
    pub fn load() -> Result<Self, SettingsError> {
        Ok(Self::load_from(&default_settings_path())?.with_env_overrides())
    }

    /// Loads settings from `path`. A missing file yields defaults; a malformed one
    /// logs a warning and also yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => Ok(settings),
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse settings file; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Applies `REELFLOW_THEME` and `REELFLOW_TAB` on top of the current values.
    /// Unrecognised tab names are ignored with a warning.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(theme) = non_empty_var(THEME_ENV) {
            self.theme = Some(theme);
        }
        if let Some(raw_tab) = non_empty_var(TAB_ENV) {
            match raw_tab.parse::<Tab>() {
                Ok(tab) => self.initial_tab = Some(tab),
                Err(error) => warn!(variable = TAB_ENV, error = %error, "Ignoring invalid tab override"),
            }
        }
        self
    }

    /// Applies command-line values; `None` keeps the lower layer.
    pub fn with_overrides(mut self, theme: Option<String>, initial_tab: Option<Tab>) -> Self {
        if theme.is_some() {
            self.theme = theme;
        }
        if initial_tab.is_some() {
            self.initial_tab = initial_tab;
        }
        self
    }

    pub fn initial_tab(&self) -> Tab {
        self.initial_tab.unwrap_or_default()
    }
}

/// Settings path honouring `REELFLOW_SETTINGS_PATH`.
pub fn default_settings_path() -> PathBuf {
    if let Some(path) = non_empty_var(SETTINGS_PATH_ENV) {
        return expand_tilde(&path);
    }
    app_config_dir().join(SETTINGS_FILE_NAME)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
