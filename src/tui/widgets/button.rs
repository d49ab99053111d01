//! Clickable button rendered as a filled label

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

/// A one-row button such as ` 🤖 Summarize Thread `
pub struct Button<'a> {
    icon: Option<&'a str>,
    label: &'a str,
    enabled: bool,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            icon: None,
            label,
            enabled: true,
            theme,
        }
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn text(&self) -> String {
        match self.icon {
            Some(icon) => format!(" {} {} ", icon, self.label),
            None => format!(" {} ", self.label),
        }
    }

    /// Columns the button occupies.
    pub fn width(&self) -> u16 {
        self.text().width() as u16
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        let style = if self.enabled {
            Style::default()
                .fg(Color::White)
                .bg(self.theme.button)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.theme.text_muted)
                .bg(self.theme.button_disabled)
        };
        let span = Span::styled(self.text(), style);
        buf.set_span(area.x, area.y, &span, area.width);
    }
}
