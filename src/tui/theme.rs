//! TUI color theme

use ratatui::style::Color;

/// TUI color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel_background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    /// Sender label of the user's own messages
    pub sender_me: Color,
    /// Sender label of AI messages and notes
    pub sender_ai: Color,
    /// Sender label of everyone else
    pub sender_other: Color,
    pub button: Color,
    pub button_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(30, 30, 30),
            panel_background: Color::Rgb(37, 37, 38),
            text: Color::Rgb(212, 212, 212),
            text_muted: Color::Rgb(128, 128, 128),
            border: Color::Rgb(60, 60, 60),
            accent: Color::Rgb(0, 122, 204),
            success: Color::Rgb(72, 185, 100),
            sender_me: Color::Rgb(72, 185, 100),
            sender_ai: Color::Rgb(197, 134, 192),
            sender_other: Color::Rgb(156, 220, 254),
            button: Color::Rgb(0, 122, 204),
            button_disabled: Color::Rgb(70, 70, 70),
        }
    }
}
