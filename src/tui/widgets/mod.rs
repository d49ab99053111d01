mod button;
mod chat_list;
mod messages;
pub mod status;

pub use button::Button;
pub use chat_list::{ChatListWidget, ROW_HEIGHT};
pub use messages::{MessageList, MessageListState};
pub use status::StatusBar;
