//! Event handling for keyboard, mouse, and terminal events

use std::time::Duration;

use arboard::Clipboard;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal key press
    Key(KeyEvent),
    /// Left click
    Click { row: u16, col: u16 },
    /// Mouse wheel up
    ScrollUp,
    /// Mouse wheel down
    ScrollDown,
    /// Terminal resize
    Resize(u16, u16),
    /// Bracketed paste
    Paste(String),
}

impl AppEvent {
    /// Translate a raw terminal event. `None` for events the app ignores.
    fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            Event::Mouse(mouse) => Self::from_mouse(mouse),
            Event::Resize(w, h) => Some(Self::Resize(w, h)),
            Event::Paste(text) => Some(Self::Paste(text)),
            _ => None,
        }
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::Click {
                row: mouse.row,
                col: mouse.column,
            }),
            MouseEventKind::ScrollUp => Some(Self::ScrollUp),
            MouseEventKind::ScrollDown => Some(Self::ScrollDown),
            _ => None,
        }
    }
}

/// Event handler that polls for terminal events on an input thread.
///
/// Events are handled one at a time by whoever calls [`EventHandler::next`].
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Create a new event handler polling every `poll_interval`
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::spawn(move || {
            while !tx.is_closed() {
                match event::poll(poll_interval) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        tracing::error!("Terminal poll failed: {}", e);
                        break;
                    }
                }
                match event::read() {
                    Ok(raw) => {
                        if let Some(event) = AppEvent::from_terminal(raw) {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("Terminal read failed: {}", e);
                        break;
                    }
                }
            }
            tracing::debug!("input thread stopped");
        });

        Self { rx }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Clipboard access for pasting into the name field
pub struct ClipboardManager {
    clipboard: Option<Clipboard>,
}

impl ClipboardManager {
    pub fn new() -> Self {
        let clipboard = Clipboard::new()
            .map_err(|e| tracing::debug!("Clipboard unavailable: {}", e))
            .ok();
        Self { clipboard }
    }

    /// Paste text from clipboard
    pub fn paste(&mut self) -> Option<String> {
        self.clipboard.as_mut()?.get_text().ok()
    }
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}
