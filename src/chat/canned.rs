//! Fixed texts displayed by the "AI" actions.

/// Shown by "Summarize Thread".
pub const SUMMARY: &str =
    "Summary: This chat contains team discussions and updates on ongoing projects.";

/// Shown by "Smart Reply Suggestion".
pub const SMART_REPLY: &str =
    "Smart Reply Suggestion: Can you please clarify the timeline for this task?";

/// Shown by "Generate Icebreaker" on the new-chat form.
pub const ICEBREAKER: &str = "👋 Hi! What will we collaborate on today?";

/// Rendered in place of an empty thread.
pub const EMPTY_THREAD: &str = "No messages yet in this chat.";
