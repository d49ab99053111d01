//! In-memory chat data: summaries, message threads and the canned texts
//! shown by the AI buttons.

pub mod canned;
mod model;
mod seed;
mod store;

pub use model::{ChatId, ChatSummary, Message, Sender};
pub use store::{ChatStore, StoreError};
