use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Orchid palette: purple/pink surfaces with a terminal-green JSON viewer.
pub const BG: Color = Color::Rgb(0x1E, 0x1A, 0x2E); // #1e1a2e
pub const PANEL: Color = Color::Rgb(0x26, 0x21, 0x3A); // #26213a
pub const PANEL_MUTED: Color = Color::Rgb(0x3A, 0x33, 0x55); // #3a3355
pub const FOREGROUND: Color = Color::Rgb(0xF5, 0xF3, 0xFF); // #f5f3ff
pub const LAVENDER: Color = Color::Rgb(0xC4, 0xB5, 0xFD); // #c4b5fd
pub const SLATE: Color = Color::Rgb(0x8B, 0x85, 0xA8); // #8b85a8

pub const PURPLE: Color = Color::Rgb(0x93, 0x33, 0xEA); // #9333ea
pub const PINK: Color = Color::Rgb(0xEC, 0x48, 0x99); // #ec4899
pub const RED: Color = Color::Rgb(0xEF, 0x44, 0x44); // #ef4444
pub const ORANGE: Color = Color::Rgb(0xF9, 0x73, 0x16); // #f97316
pub const BLUE: Color = Color::Rgb(0x3B, 0x82, 0xF6); // #3b82f6
pub const GREEN: Color = Color::Rgb(0x22, 0xC5, 0x5E); // #22c55e
pub const INDIGO: Color = Color::Rgb(0x63, 0x66, 0xF1); // #6366f1
pub const TERMINAL_GREEN: Color = Color::Rgb(0x4A, 0xDE, 0x80); // #4ade80
pub const AMBER: Color = Color::Rgb(0xFB, 0xBF, 0x24); // #fbbf24
pub const CYAN: Color = Color::Rgb(0x22, 0xD3, 0xEE); // #22d3ee

/// Default truecolor theme.
#[derive(Debug, Clone)]
pub struct OrchidTheme {
    roles: ThemeRoles,
}

impl OrchidTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: PANEL,
                surface_muted: PANEL_MUTED,
                border: PANEL_MUTED,

                text: FOREGROUND,
                text_secondary: LAVENDER,
                text_muted: SLATE,

                accent_primary: PINK,
                accent_secondary: CYAN,

                success: GREEN,
                error: RED,

                selection_bg: PURPLE,
                selection_fg: FOREGROUND,

                syntax_string: TERMINAL_GREEN,
                syntax_number: AMBER,
                syntax_keyword: PINK,
                syntax_punctuation: LAVENDER,

                stage_accents: [RED, ORANGE, BLUE, GREEN, PURPLE, INDIGO],

                scrollbar_track: PANEL_MUTED,
                scrollbar_thumb: LAVENDER,
            },
        }
    }
}

impl Default for OrchidTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for OrchidTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
