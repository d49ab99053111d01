//! Status bar widget
//!
//! Displays a screen indicator, key hints and the chat count.
//! Format: ` SCREEN  │ hints... │ N chats`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::Screen;
use crate::tui::theme::Theme;

/// Status bar for the bottom row
pub struct StatusBar<'a> {
    screen: Screen,
    chat_count: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(screen: Screen, chat_count: usize, theme: &'a Theme) -> Self {
        Self {
            screen,
            chat_count,
            theme,
        }
    }

    fn mode_info(&self) -> (&'static str, Color) {
        match self.screen {
            Screen::List => ("CHATS", self.theme.accent),
            Screen::Chat => ("CHAT", self.theme.success),
            Screen::New => ("NEW", self.theme.sender_ai),
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.screen {
            Screen::List => &[("↑↓", "select"), ("Enter", "open"), ("n", "new"), ("q", "quit")],
            Screen::Chat => &[("s", "summarize"), ("r", "smart reply"), ("Esc", "back")],
            Screen::New => &[("Enter", "start"), ("Ctrl+G", "icebreaker"), ("Esc", "back")],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(self.theme.background));

        let (mode_text, mode_color) = self.mode_info();
        let muted = Style::default().fg(self.theme.text_muted);

        let mut spans = vec![
            Span::styled(
                format!(" {} ", mode_text),
                Style::default()
                    .fg(Color::Black)
                    .bg(mode_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", muted),
        ];

        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", muted));
            }
            spans.push(Span::styled(format!("{}: {}", key, action), muted));
        }

        let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let count_text = format!("{} chats ", self.chat_count);
        let padding = (area.width as usize).saturating_sub(left_width + count_text.width());
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
        }
        spans.push(Span::styled(count_text, muted));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
