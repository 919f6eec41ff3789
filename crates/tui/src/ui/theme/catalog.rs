use super::{Ansi256Theme, OrchidTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier accepted by `--theme` and the settings file.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Alternate spellings that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of themes; `Ctrl+T` cycles in this order.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "orchid",
        label: "Orchid",
        aliases: &["orchid", "default", "purple"],
        is_ansi_fallback: false,
        factory: || Box::new(OrchidTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[1]
}

/// Definition following `id` in catalog order, wrapping around.
///
/// With `ansi_only`, truecolor palettes are skipped; if nothing else
/// qualifies the current definition is returned.
pub fn next_after(id: &str, ansi_only: bool) -> &'static ThemeDefinition {
    let count = THEME_DEFINITIONS.len();
    let position = THEME_DEFINITIONS
        .iter()
        .position(|definition| definition.id == id)
        .unwrap_or(0);
    (1..=count)
        .map(|step| &THEME_DEFINITIONS[(position + step) % count])
        .find(|definition| !ansi_only || definition.is_ansi_fallback)
        .unwrap_or(&THEME_DEFINITIONS[position])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_ids_and_aliases_case_insensitively() {
        assert_eq!(resolve("Orchid").map(|definition| definition.id), Some("orchid"));
        assert_eq!(resolve("ANSI").map(|definition| definition.id), Some("ansi256"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn next_after_wraps_around() {
        assert_eq!(next_after("orchid", false).id, "ansi256");
        assert_eq!(next_after("ansi256", false).id, "orchid");
    }

    #[test]
    fn next_after_skips_truecolor_palettes_on_ansi_terminals() {
        assert_eq!(next_after("ansi256", true).id, "ansi256");
        assert_eq!(next_after("orchid", true).id, "ansi256");
    }

    #[test]
    fn defaults_match_their_capability() {
        assert!(!default_truecolor().is_ansi_fallback);
        assert!(default_ansi().is_ansi_fallback);
    }
}
