use ratatui::widgets::ListState;

use super::{ChatWindowState, NewChatForm};
use crate::chat::ChatId;

/// The screen selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    List,
    Chat,
    New,
}

/// Current screen with the state that only lives while it is shown.
///
/// Switching screens replaces the whole value, so transient state never
/// survives leaving a view.
pub enum View {
    /// Chat list with the highlighted row
    List(ListState),
    /// An open chat
    Chat {
        chat: ChatId,
        window: ChatWindowState,
    },
    /// The new-chat form
    New(NewChatForm),
}

impl View {
    /// Fresh list view, highlighting the first of `rows` entries.
    pub fn list(rows: usize) -> Self {
        Self::List(ListState::default().with_selected((rows > 0).then_some(0)))
    }

    pub fn chat(chat: ChatId) -> Self {
        Self::Chat {
            chat,
            window: ChatWindowState::default(),
        }
    }

    pub fn new_chat() -> Self {
        Self::New(NewChatForm::new())
    }

    pub fn screen(&self) -> Screen {
        match self {
            Self::List(_) => Screen::List,
            Self::Chat { .. } => Screen::Chat,
            Self::New(_) => Screen::New,
        }
    }

    /// The chat being shown, if any.
    pub fn active_chat(&self) -> Option<ChatId> {
        match self {
            Self::Chat { chat, .. } => Some(*chat),
            _ => None,
        }
    }
}
