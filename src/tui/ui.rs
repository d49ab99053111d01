//! Main UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::action::Action;
use super::hit_test::{ClickTarget, HitTestRegistry};
use super::state::{ChatController, ChatWindowState, NewChatForm, View};
use super::theme::Theme;
use super::widgets::{Button, ChatListWidget, MessageList, StatusBar};
use crate::chat::{ChatId, ChatStore};

/// Columns between neighbouring buttons
const BUTTON_GAP: u16 = 2;

/// Render the current screen
pub fn render(
    frame: &mut Frame,
    controller: &mut ChatController,
    registry: &mut HitTestRegistry,
    theme: &Theme,
) {
    registry.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(2), // Actions
            Constraint::Length(1), // Status
        ])
        .split(frame.area());

    let screen = controller.screen();
    let (store, view) = controller.parts_mut();

    match view {
        View::List(state) => {
            render_header(frame, registry, theme, chunks[0], None, "💬 Team Chats");
            let button = Button::new("New", theme).icon("+");
            let width = button.width();
            let x = chunks[0].right().saturating_sub(width + 1);
            place_button(frame, registry, button, x, chunks[0].y, Action::NewChat);

            let list = ChatListWidget::new(store.chats(), theme).registry(registry);
            frame.render_stateful_widget(list, inner(chunks[1]), state);
        }
        View::Chat { chat, window } => {
            let title = store
                .chat(*chat)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            render_header(frame, registry, theme, chunks[0], Some(Action::Back), &title);
            render_chat(frame, registry, theme, store, *chat, window, &chunks);
        }
        View::New(form) => {
            render_header(frame, registry, theme, chunks[0], Some(Action::Back), "New Chat");
            render_new_chat(frame, registry, theme, form, &chunks);
        }
    }

    frame.render_widget(StatusBar::new(screen, store.len(), theme), chunks[3]);
}

/// Body area with a one-column margin on each side.
fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

/// Draw a button at (x, y) and register it. Returns the x after the button and gap.
///
/// Buttons falling outside the frame (e.g. a one-row terminal) are skipped.
fn place_button(
    frame: &mut Frame,
    registry: &mut HitTestRegistry,
    button: Button,
    x: u16,
    y: u16,
    action: Action,
) -> u16 {
    let rect = Rect::new(x, y, button.width(), 1).intersection(frame.area());
    if rect.is_empty() {
        return x;
    }
    frame.render_widget(button, rect);
    registry.register(rect, ClickTarget::Button(action));
    x + rect.width + BUTTON_GAP
}

fn render_header(
    frame: &mut Frame,
    registry: &mut HitTestRegistry,
    theme: &Theme,
    area: Rect,
    back: Option<Action>,
    title: &str,
) {
    frame.render_widget(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
        area,
    );

    let mut x = area.x + 1;
    if let Some(action) = back {
        x = place_button(frame, registry, Button::new("Back", theme).icon("←"), x, area.y, action);
    }

    let title = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(
        title,
        Rect::new(x, area.y, area.right().saturating_sub(x), 1).intersection(area),
    );
}

fn render_chat(
    frame: &mut Frame,
    registry: &mut HitTestRegistry,
    theme: &Theme,
    store: &ChatStore,
    chat: ChatId,
    window: &mut ChatWindowState,
    chunks: &[Rect],
) {
    let list = MessageList::new(store.messages(chat), theme).notes(window.notes());
    frame.render_stateful_widget(list, inner(chunks[1]), &mut window.scroll);

    let actions = chunks[2];
    let mut x = actions.x + 1;
    x = place_button(
        frame,
        registry,
        Button::new("Summarize Thread", theme).icon("🤖"),
        x,
        actions.y,
        Action::Summarize,
    );
    place_button(
        frame,
        registry,
        Button::new("Smart Reply Suggestion", theme).icon("✨"),
        x,
        actions.y,
        Action::SmartReply,
    );
}

fn render_new_chat(
    frame: &mut Frame,
    registry: &mut HitTestRegistry,
    theme: &Theme,
    form: &NewChatForm,
    chunks: &[Rect],
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name field
            Constraint::Length(1),
            Constraint::Length(1), // Icebreaker button
            Constraint::Length(1),
            Constraint::Min(0), // Icebreaker note
        ])
        .split(inner(chunks[1]));

    frame.render_widget(form.field(), rows[0]);

    place_button(
        frame,
        registry,
        Button::new("Generate Icebreaker", theme).icon("😊"),
        rows[2].x,
        rows[2].y,
        Action::GenerateIcebreaker,
    );

    if let Some(icebreaker) = form.icebreaker() {
        let note = Paragraph::new(vec![
            Line::from(Span::styled(
                "AI",
                Style::default()
                    .fg(theme.sender_ai)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(icebreaker, Style::default().fg(theme.sender_ai))),
        ]);
        frame.render_widget(note, rows[4]);
    }

    // Disabled while the name is blank; a click still reaches the controller, which ignores it
    let actions = chunks[2];
    place_button(
        frame,
        registry,
        Button::new("Start Chat", theme).enabled(form.can_start()),
        actions.x + 1,
        actions.y,
        Action::StartChat,
    );
}
