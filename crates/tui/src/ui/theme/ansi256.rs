//! ANSI 256-color fallback for terminals without truecolor support.
//!
//! Approximates the Orchid palette with indexed colors so the page stays
//! legible inside macOS Terminal and other 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(234),
                surface: Color::Indexed(235),
                surface_muted: Color::Indexed(238),
                border: Color::Indexed(239),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(183),
                text_muted: Color::Indexed(246),

                accent_primary: Color::Indexed(205),
                accent_secondary: Color::Indexed(45),

                success: Color::Indexed(77),
                error: Color::Indexed(203),

                selection_bg: Color::Indexed(91),
                selection_fg: Color::Indexed(255),

                syntax_string: Color::Indexed(84),
                syntax_number: Color::Indexed(221),
                syntax_keyword: Color::Indexed(205),
                syntax_punctuation: Color::Indexed(183),

                stage_accents: [
                    Color::Indexed(203),
                    Color::Indexed(208),
                    Color::Indexed(75),
                    Color::Indexed(77),
                    Color::Indexed(135),
                    Color::Indexed(99),
                ],

                scrollbar_track: Color::Indexed(238),
                scrollbar_thumb: Color::Indexed(183),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
