//! Team Chats
//!
//! A terminal chat mock: a chat list, a chat window with canned AI
//! actions, and a new-chat form. All data lives in memory.

pub mod chat;
pub mod config;
pub mod runner;

#[cfg(feature = "tui")]
pub mod tui;
