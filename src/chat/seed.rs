//! Compiled-in starting data

use super::model::{ChatId, ChatSummary, Message, Sender};

/// (id, name, preview, last active)
static CHATS: [(u32, &str, &str, &str); 3] = [
    (1, "Design Team", "Upload ready. Please review.", "12:34"),
    (2, "Frontend Squad", "Let's update those color tokens.", "09:22"),
    (3, "Product Managers", "Sprint review at 3 PM.", "08:17"),
];

/// (chat id, sender, body, time)
static MESSAGES: [(u32, &str, &str, &str); 4] = [
    (1, "Alice", "Let's refine the UI today!", "11:45 AM"),
    (1, "Me", "Agreed! I'll check the Figma now.", "11:47 AM"),
    (2, "Bob", "Don't forget dark mode!", "09:00 AM"),
    (3, "Sara", "Agenda: Roadmap and feedback.", "08:10 AM"),
];

/// Seed chats paired with their threads, in list order.
pub(super) fn initial_chats() -> impl Iterator<Item = (ChatSummary, Vec<Message>)> {
    CHATS.iter().map(|&(id, name, preview, last_active)| {
        let thread = MESSAGES
            .iter()
            .filter(|(chat, ..)| *chat == id)
            .map(|&(_, sender, body, sent_at)| {
                Message::new(Sender::from_label(sender), body, sent_at)
            })
            .collect();
        let summary = ChatSummary {
            id: ChatId(id),
            name: name.to_string(),
            preview: preview.to_string(),
            last_active: last_active.to_string(),
        };
        (summary, thread)
    })
}
