//! TUI (Terminal User Interface) for Team Chats
//!
//! Three screens (chat list, chat window, new-chat form) driven by
//! keyboard and mouse.

mod action;
mod app;
mod event;
mod theme;
mod ui;

pub mod hit_test;
pub mod state;
pub mod widgets;

pub use action::{key_action, Action};
pub use app::TuiApp;
pub use theme::Theme;

use anyhow::Result;

use crate::chat::ChatStore;

/// Run the TUI application
pub async fn run(store: ChatStore) -> Result<()> {
    let mut app = TuiApp::new(store)?;
    app.run().await
}
