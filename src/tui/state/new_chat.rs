//! Transient state of the new-chat form

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::chat::canned;
use crate::tui::theme::Theme;

const NAME_PLACEHOLDER: &str = "Enter participant or team name";

/// Name field plus the optional icebreaker note
pub struct NewChatForm {
    field: TextArea<'static>,
    icebreaker: Option<&'static str>,
}

impl NewChatForm {
    pub fn new() -> Self {
        Self {
            field: Self::build_field(),
            icebreaker: None,
        }
    }

    /// Field contents, unvalidated.
    pub fn name(&self) -> String {
        self.field.lines().join(" ")
    }

    /// Name a new chat is created with.
    pub fn trimmed_name(&self) -> String {
        self.name().trim().to_string()
    }

    /// Whether "Start Chat" is enabled.
    pub fn can_start(&self) -> bool {
        !self.trimmed_name().is_empty()
    }

    pub fn icebreaker(&self) -> Option<&'static str> {
        self.icebreaker
    }

    pub fn generate_icebreaker(&mut self) {
        self.icebreaker = Some(canned::ICEBREAKER);
    }

    /// Forward a key to the name field. Returns whether the text changed.
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        let input = input.into();
        // The field is single-line
        let newline = matches!(input.key, Key::Enter)
            || (input.ctrl && matches!(input.key, Key::Char('m') | Key::Char('j')));
        if newline {
            return false;
        }
        self.field.input(input)
    }

    /// Insert text at the cursor with line breaks flattened to spaces.
    pub fn paste(&mut self, text: &str) -> bool {
        let flat: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.field.insert_str(flat)
    }

    pub fn field(&self) -> &TextArea<'static> {
        &self.field
    }

    fn build_field() -> TextArea<'static> {
        let theme = Theme::dark();
        let mut field = TextArea::default();
        field.set_cursor_line_style(Style::default());
        field.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        field.set_placeholder_text(NAME_PLACEHOLDER);
        field.set_placeholder_style(Style::default().fg(theme.text_muted));
        field.set_style(Style::default().fg(theme.text));
        field.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Name "),
        );
        field.move_cursor(CursorMove::End);
        field
    }
}

impl Default for NewChatForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_str(form: &mut NewChatForm, text: &str) {
        for c in text.chars() {
            form.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_starts_empty() {
        let form = NewChatForm::new();
        assert_eq!(form.name(), "");
        assert!(form.icebreaker().is_none());
        assert!(!form.can_start());
    }

    #[test]
    fn test_typing_updates_name_verbatim() {
        let mut form = NewChatForm::new();
        type_str(&mut form, "  Ops ");
        assert_eq!(form.name(), "  Ops ");
        assert!(form.can_start());
    }

    #[test]
    fn test_trimmed_name_drops_surrounding_whitespace() {
        let mut form = NewChatForm::new();
        type_str(&mut form, "  Design Review ");
        assert_eq!(form.trimmed_name(), "Design Review");

        let mut blank = NewChatForm::new();
        type_str(&mut blank, "   ");
        assert_eq!(blank.trimmed_name(), "");
    }

    #[test]
    fn test_whitespace_only_cannot_start() {
        let mut form = NewChatForm::new();
        type_str(&mut form, "   ");
        assert!(!form.can_start());
    }

    #[test]
    fn test_enter_does_not_break_the_line() {
        let mut form = NewChatForm::new();
        type_str(&mut form, "Ops");
        assert!(!form.input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!form.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert_eq!(form.field().lines().len(), 1);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut form = NewChatForm::new();
        form.paste("Design\nReview");
        assert_eq!(form.name(), "Design Review");
    }

    #[test]
    fn test_icebreaker_is_idempotent() {
        let mut form = NewChatForm::new();
        form.generate_icebreaker();
        form.generate_icebreaker();
        assert_eq!(form.icebreaker(), Some(canned::ICEBREAKER));
    }
}
