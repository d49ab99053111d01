//! Message thread widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::chat::{canned, Message, Sender};
use crate::tui::theme::Theme;

/// Scroll state for the message list
#[derive(Debug, Clone, Default)]
pub struct MessageListState {
    /// Current scroll offset (in lines)
    pub offset: usize,
    /// Total content height (in lines), updated on render
    pub content_height: usize,
    /// Viewport height, updated on render
    pub viewport_height: usize,
}

impl MessageListState {
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = (self.offset + amount).min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }
}

/// Renders a chat's messages followed by any AI notes
pub struct MessageList<'a> {
    messages: &'a [Message],
    notes: Vec<&'static str>,
    theme: &'a Theme,
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [Message], theme: &'a Theme) -> Self {
        Self {
            messages,
            notes: Vec::new(),
            theme,
        }
    }

    pub fn notes(mut self, notes: impl IntoIterator<Item = &'static str>) -> Self {
        self.notes = notes.into_iter().collect();
        self
    }

    fn sender_style(&self, sender: &Sender) -> Style {
        let color = match sender {
            Sender::Me => self.theme.sender_me,
            Sender::Ai => self.theme.sender_ai,
            Sender::Person(_) => self.theme.sender_other,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let muted = Style::default().fg(self.theme.text_muted);
        let text = Style::default().fg(self.theme.text);

        if self.messages.is_empty() {
            lines.push(Line::from(Span::styled(
                canned::EMPTY_THREAD,
                muted.add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::default());
        }

        for msg in self.messages {
            // Own messages sit on the right
            let alignment = if msg.sender == Sender::Me {
                Alignment::Right
            } else {
                Alignment::Left
            };
            lines.push(
                Line::from(vec![
                    Span::styled(msg.sender.label().to_string(), self.sender_style(&msg.sender)),
                    Span::styled(format!(" · {}", msg.sent_at), muted),
                ])
                .alignment(alignment),
            );
            lines.push(Line::from(Span::styled(msg.body.as_str(), text)).alignment(alignment));
            lines.push(Line::default());
        }

        for note in &self.notes {
            lines.push(Line::from(Span::styled(
                Sender::Ai.label().to_string(),
                self.sender_style(&Sender::Ai),
            )));
            lines.push(Line::from(Span::styled(
                *note,
                Style::default().fg(self.theme.sender_ai),
            )));
            lines.push(Line::default());
        }

        lines
    }
}

impl StatefulWidget for MessageList<'_> {
    type State = MessageListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let paragraph = Paragraph::new(self.lines()).wrap(Wrap { trim: false });

        // Height after word wrapping, so the last line can always be scrolled to
        state.viewport_height = area.height as usize;
        state.content_height = paragraph.line_count(area.width);
        state.offset = state.offset.min(state.max_offset());

        paragraph
            .scroll((state.offset as u16, 0))
            .render(area, buf);
    }
}
