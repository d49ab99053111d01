//! Per-visit state of the chat window

use crate::chat::canned;
use crate::tui::widgets::MessageListState;

/// AI notes and scroll position for an open chat.
///
/// Notes are display-only and never become messages in the store.
#[derive(Debug, Clone, Default)]
pub struct ChatWindowState {
    summary: Option<&'static str>,
    smart_reply: Option<&'static str>,
    pub scroll: MessageListState,
}

impl ChatWindowState {
    pub fn summarize(&mut self) {
        self.summary = Some(canned::SUMMARY);
    }

    pub fn smart_reply(&mut self) {
        self.smart_reply = Some(canned::SMART_REPLY);
    }

    /// Notes to show under the thread, summary first.
    pub fn notes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.summary.into_iter().chain(self.smart_reply)
    }
}
