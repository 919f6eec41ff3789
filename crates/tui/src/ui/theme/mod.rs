//! Theme styling for the TUI.
//!
//! Defines the Orchid truecolor palette, an ANSI 256-color fallback, semantic
//! roles, and helper builders for Ratatui widgets. Components take colors from
//! these helpers rather than hard-coding them.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod catalog;
pub mod orchid;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use orchid::OrchidTheme;
pub use roles::Theme;

/// Environment variable forcing the color capability (`truecolor` or `ansi256`).
pub const COLOR_MODE_ENV: &str = "REELFLOW_COLOR_MODE";

/// Theme plus the definition that produced it.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
    /// The terminal only renders ANSI palettes; truecolor themes are off limits.
    pub ansi_only: bool,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition, capability: ColorCapability) -> Self {
        Self {
            definition,
            theme: definition.build(),
            ansi_only: capability == ColorCapability::Ansi256,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the configured preference and terminal capability.
///
/// ANSI-only terminals always receive an ANSI palette, whatever was requested.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    select(preferred_theme, detect_color_capability())
}

fn select(preferred_theme: Option<&str>, capability: ColorCapability) -> LoadedTheme {
    let requested = preferred_theme.and_then(|name| {
        let resolved = catalog::resolve(name.trim());
        if resolved.is_none() {
            debug!(theme = name, "Unknown theme requested; using default.");
        }
        resolved
    });

    match (capability, requested) {
        (ColorCapability::Ansi256, Some(definition)) if definition.is_ansi_fallback => {
            LoadedTheme::from_definition(definition, capability)
        }
        (ColorCapability::Ansi256, _) => {
            debug!("ANSI-only terminal detected; forcing fallback palette.");
            LoadedTheme::from_definition(catalog::default_ansi(), capability)
        }
        (ColorCapability::Truecolor, Some(definition)) => LoadedTheme::from_definition(definition, capability),
        (ColorCapability::Truecolor, None) => LoadedTheme::from_definition(catalog::default_truecolor(), capability),
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var(COLOR_MODE_ENV).ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
