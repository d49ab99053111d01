//! Chat list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, StatefulWidget},
};
use unicode_width::UnicodeWidthStr;

use crate::chat::ChatSummary;
use crate::tui::hit_test::{ClickTarget, HitTestRegistry};
use crate::tui::theme::Theme;

/// Rows per chat: name and time, then the preview
pub const ROW_HEIGHT: u16 = 2;

const HIGHLIGHT_SYMBOL: &str = "▌ ";

/// Renders chat summaries and registers each visible row for clicks
pub struct ChatListWidget<'a> {
    chats: &'a [ChatSummary],
    theme: &'a Theme,
    registry: Option<&'a mut HitTestRegistry>,
}

impl<'a> ChatListWidget<'a> {
    pub fn new(chats: &'a [ChatSummary], theme: &'a Theme) -> Self {
        Self {
            chats,
            theme,
            registry: None,
        }
    }

    pub fn registry(mut self, registry: &'a mut HitTestRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    fn item(&self, chat: &'a ChatSummary, width: usize) -> ListItem<'a> {
        let used = chat.name.width() + chat.last_active.width();
        let gap = width.saturating_sub(used).max(1);

        let header = Line::from(vec![
            Span::styled(
                chat.name.as_str(),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                chat.last_active.as_str(),
                Style::default().fg(self.theme.text_muted),
            ),
        ]);
        let preview = Line::from(Span::styled(
            chat.preview.as_str(),
            Style::default().fg(self.theme.text_muted),
        ));

        ListItem::new(Text::from(vec![header, preview]))
    }
}

impl StatefulWidget for ChatListWidget<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let width = (area.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.width());
        let items: Vec<ListItem> = self
            .chats
            .iter()
            .map(|chat| self.item(chat, width))
            .collect();

        let list = List::new(items)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(Style::default().bg(self.theme.panel_background));
        StatefulWidget::render(list, area, buf, state);

        let Some(registry) = self.registry else {
            return;
        };
        let offset = state.offset();
        for (row, chat) in self.chats.iter().enumerate().skip(offset) {
            let y = area.y + (row - offset) as u16 * ROW_HEIGHT;
            if y + ROW_HEIGHT > area.bottom() {
                break;
            }
            registry.register(
                Rect::new(area.x, y, area.width, ROW_HEIGHT),
                ClickTarget::Chat(chat.id),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ChatId, ChatStore};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_renders_names_times_and_previews() {
        let store = ChatStore::seeded();
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default();

        ChatListWidget::new(store.chats(), &theme).render(area, &mut buf, &mut state);

        assert!(row(&buf, 0).contains("Design Team"));
        assert!(row(&buf, 0).trim_end().ends_with("12:34"));
        assert!(row(&buf, 1).contains("Upload ready. Please review."));
        assert!(row(&buf, 4).contains("Product Managers"));
    }

    #[test]
    fn test_registers_visible_rows() {
        let store = ChatStore::seeded();
        let theme = Theme::dark();
        let area = Rect::new(0, 2, 40, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 8));
        let mut state = ListState::default();
        let mut registry = HitTestRegistry::new();

        ChatListWidget::new(store.chats(), &theme)
            .registry(&mut registry)
            .render(area, &mut buf, &mut state);

        assert_eq!(registry.hit_test(5, 2), Some(ClickTarget::Chat(ChatId(1))));
        assert_eq!(registry.hit_test(5, 5), Some(ClickTarget::Chat(ChatId(2))));
        // Third row does not fit in five lines
        assert_eq!(registry.hit_test(5, 6), None);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        let mut registry = HitTestRegistry::new();

        ChatListWidget::new(&[], &theme)
            .registry(&mut registry)
            .render(area, &mut buf, &mut ListState::default());

        assert_eq!(row(&buf, 0).trim(), "");
        assert_eq!(registry.hit_test(0, 0), None);
    }
}
