//! User intents and the key bindings that produce them

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::Screen;
use crate::chat::ChatId;

/// Something the user asked for, independent of how it was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Open a chat from the list
    OpenChat(ChatId),
    /// Open the highlighted list row
    OpenSelected,
    SelectNext,
    SelectPrevious,
    /// Show the new-chat form
    NewChat,
    /// Return to the chat list
    Back,
    Summarize,
    SmartReply,
    GenerateIcebreaker,
    /// Create a chat from the form's name field
    StartChat,
    ScrollUp,
    ScrollDown,
    Quit,
}

/// Map a key press to an action for the given screen.
///
/// `None` on the new-chat screen means the key belongs to the name field.
pub fn key_action(screen: Screen, key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('g') if screen == Screen::New => Some(Action::GenerateIcebreaker),
            _ => None,
        };
    }

    match screen {
        Screen::List => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Enter => Some(Action::OpenSelected),
            KeyCode::Char('n') | KeyCode::Char('+') => Some(Action::NewChat),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Chat => match key.code {
            KeyCode::Char('s') => Some(Action::Summarize),
            KeyCode::Char('r') => Some(Action::SmartReply),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Some(Action::Back),
            KeyCode::Up | KeyCode::PageUp => Some(Action::ScrollUp),
            KeyCode::Down | KeyCode::PageDown => Some(Action::ScrollDown),
            _ => None,
        },
        Screen::New => match key.code {
            KeyCode::Enter => Some(Action::StartChat),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_works_everywhere() {
        for screen in [Screen::List, Screen::Chat, Screen::New] {
            assert_eq!(key_action(screen, &ctrl('q')), Some(Action::Quit));
            assert_eq!(key_action(screen, &ctrl('c')), Some(Action::Quit));
        }
    }

    #[test]
    fn test_list_bindings() {
        assert_eq!(key_action(Screen::List, &key(KeyCode::Char('j'))), Some(Action::SelectNext));
        assert_eq!(key_action(Screen::List, &key(KeyCode::Up)), Some(Action::SelectPrevious));
        assert_eq!(key_action(Screen::List, &key(KeyCode::Enter)), Some(Action::OpenSelected));
        assert_eq!(key_action(Screen::List, &key(KeyCode::Char('n'))), Some(Action::NewChat));
    }

    #[test]
    fn test_chat_bindings() {
        assert_eq!(key_action(Screen::Chat, &key(KeyCode::Char('s'))), Some(Action::Summarize));
        assert_eq!(key_action(Screen::Chat, &key(KeyCode::Char('r'))), Some(Action::SmartReply));
        assert_eq!(key_action(Screen::Chat, &key(KeyCode::Esc)), Some(Action::Back));
        // No path from a chat straight to the new-chat form
        assert_eq!(key_action(Screen::Chat, &key(KeyCode::Char('n'))), None);
    }

    #[test]
    fn test_new_chat_leaves_typing_to_the_field() {
        assert_eq!(key_action(Screen::New, &key(KeyCode::Char('s'))), None);
        assert_eq!(key_action(Screen::New, &key(KeyCode::Char('q'))), None);
        assert_eq!(key_action(Screen::New, &key(KeyCode::Enter)), Some(Action::StartChat));
        assert_eq!(key_action(Screen::New, &ctrl('g')), Some(Action::GenerateIcebreaker));
        assert_eq!(key_action(Screen::List, &ctrl('g')), None);
    }
}
