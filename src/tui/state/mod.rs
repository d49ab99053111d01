//! View state: which screen is showing and the transient state behind it

mod chat_window;
mod controller;
mod new_chat;
mod view;

pub use chat_window::ChatWindowState;
pub use controller::ChatController;
pub use new_chat::NewChatForm;
pub use view::{Screen, View};
