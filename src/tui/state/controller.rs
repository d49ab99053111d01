//! Top-level controller: owns the store and applies actions to the view.

use chrono::NaiveTime;

use super::{Screen, View};
use crate::chat::{ChatId, ChatStore, ChatSummary, StoreError};
use crate::tui::action::Action;

/// Lines scrolled per scroll action in the chat window
const SCROLL_STEP: usize = 3;

fn local_time() -> NaiveTime {
    chrono::Local::now().time()
}

/// Holds the chat store and the current view.
///
/// Every state change goes through [`ChatController::dispatch`].
pub struct ChatController {
    store: ChatStore,
    view: View,
    clock: fn() -> NaiveTime,
}

impl ChatController {
    /// Start on the chat list with nothing open.
    pub fn new(store: ChatStore) -> Self {
        let view = View::list(store.len());
        Self {
            store,
            view,
            clock: local_time,
        }
    }

    /// Replace the clock used to stamp new chats.
    pub fn with_clock(mut self, clock: fn() -> NaiveTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    /// Summary of the open chat. `None` unless the chat screen is showing.
    pub fn active_chat(&self) -> Option<&ChatSummary> {
        self.view.active_chat().and_then(|id| self.store.chat(id))
    }

    pub fn store(&self) -> &ChatStore {
        &self.store
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Split borrow for rendering.
    pub fn parts_mut(&mut self) -> (&ChatStore, &mut View) {
        (&self.store, &mut self.view)
    }

    /// Apply an action. Actions that do not belong to the current screen are ignored.
    pub fn dispatch(&mut self, action: Action) {
        let screen = self.screen();
        match (screen, action) {
            (Screen::List, Action::OpenChat(id)) => self.open_chat(id),
            (Screen::List, Action::OpenSelected) => {
                if let Some(id) = self.highlighted_chat() {
                    self.open_chat(id);
                }
            }
            (Screen::List, Action::SelectNext) => self.move_highlight(true),
            (Screen::List, Action::SelectPrevious) => self.move_highlight(false),
            (Screen::List, Action::NewChat) => {
                tracing::debug!("opening new chat form");
                self.view = View::new_chat();
            }
            (Screen::Chat | Screen::New, Action::Back) => {
                tracing::debug!(from = ?screen, "back to chat list");
                self.view = View::list(self.store.len());
            }
            (Screen::Chat, Action::Summarize | Action::SmartReply) => {
                if let View::Chat { window, .. } = &mut self.view {
                    if action == Action::Summarize {
                        window.summarize();
                    } else {
                        window.smart_reply();
                    }
                }
            }
            (Screen::Chat, Action::ScrollUp | Action::ScrollDown) => {
                if let View::Chat { window, .. } = &mut self.view {
                    if action == Action::ScrollUp {
                        window.scroll.scroll_up(SCROLL_STEP);
                    } else {
                        window.scroll.scroll_down(SCROLL_STEP);
                    }
                }
            }
            (Screen::New, Action::GenerateIcebreaker) => {
                if let View::New(form) = &mut self.view {
                    form.generate_icebreaker();
                }
            }
            (Screen::New, Action::StartChat) => self.start_chat(),
            (screen, action) => tracing::trace!(?screen, ?action, "action ignored"),
        }
    }

    fn open_chat(&mut self, id: ChatId) {
        match self.store.get(id) {
            Ok(chat) => {
                tracing::debug!(chat_id = %id, name = %chat.name, "opening chat");
                self.view = View::chat(id);
            }
            Err(err) => tracing::warn!(%err, "cannot open chat"),
        }
    }

    fn highlighted_chat(&self) -> Option<ChatId> {
        let View::List(state) = &self.view else {
            return None;
        };
        let index = state.selected()?;
        self.store.chats().get(index).map(|chat| chat.id)
    }

    fn move_highlight(&mut self, forward: bool) {
        let View::List(state) = &mut self.view else {
            return;
        };
        let Some(last) = self.store.len().checked_sub(1) else {
            return;
        };
        let next = match state.selected() {
            None => 0,
            Some(i) if forward => (i + 1).min(last),
            Some(i) => i.saturating_sub(1),
        };
        state.select(Some(next));
    }

    fn start_chat(&mut self) {
        let View::New(form) = &self.view else {
            return;
        };
        let name = form.trimmed_name();
        match self.store.create_chat(&name, (self.clock)()) {
            Ok(id) => self.view = View::chat(id),
            Err(StoreError::EmptyName) => tracing::debug!("start chat ignored: empty name"),
            Err(err) => tracing::warn!(%err, "chat not created"),
        }
    }
}
