//! Hit testing for clickable TUI elements
//!
//! Tracks rendered widget bounds and maps mouse coordinates to actions

use ratatui::layout::{Position, Rect};

use super::action::Action;
use crate::chat::ChatId;

/// Identifies a clickable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// A row in the chat list
    Chat(ChatId),
    /// A button that triggers an action
    Button(Action),
}

impl ClickTarget {
    /// The action a click on this target performs.
    pub fn action(self) -> Action {
        match self {
            Self::Chat(id) => Action::OpenChat(id),
            Self::Button(action) => action,
        }
    }
}

/// Tracks clickable regions for hit testing
#[derive(Debug, Default)]
pub struct HitTestRegistry {
    /// Later registrations are on top
    regions: Vec<(Rect, ClickTarget)>,
}

impl HitTestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, rect: Rect, target: ClickTarget) {
        self.regions.push((rect, target));
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(Position::new(x, y)))
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_inside_and_outside() {
        let mut reg = HitTestRegistry::new();
        reg.register(Rect::new(2, 1, 10, 2), ClickTarget::Chat(ChatId(1)));

        assert_eq!(reg.hit_test(2, 1), Some(ClickTarget::Chat(ChatId(1))));
        assert_eq!(reg.hit_test(11, 2), Some(ClickTarget::Chat(ChatId(1))));
        assert_eq!(reg.hit_test(12, 1), None);
        assert_eq!(reg.hit_test(2, 3), None);
    }

    #[test]
    fn test_last_registered_wins() {
        let mut reg = HitTestRegistry::new();
        reg.register(Rect::new(0, 0, 20, 5), ClickTarget::Chat(ChatId(1)));
        reg.register(Rect::new(0, 0, 5, 1), ClickTarget::Button(Action::Back));

        assert_eq!(reg.hit_test(1, 0).map(ClickTarget::action), Some(Action::Back));
        assert_eq!(
            reg.hit_test(10, 3).map(ClickTarget::action),
            Some(Action::OpenChat(ChatId(1)))
        );

        reg.clear();
        assert_eq!(reg.hit_test(1, 0), None);
    }
}
