//! Main TUI application state and loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyCode, KeyEvent, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::Terminal;

use super::action::{key_action, Action};
use super::event::{AppEvent, ClipboardManager, EventHandler};
use super::hit_test::HitTestRegistry;
use super::state::{ChatController, Screen, View};
use super::theme::Theme;
use super::ui;
use crate::chat::ChatStore;

/// How long the input thread waits per poll before checking for shutdown
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main TUI application
pub struct TuiApp {
    /// Terminal instance
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Event handler (optional so we can take it out in run loop)
    events: Option<EventHandler>,
    /// Whether the app should quit
    should_quit: bool,
    /// Color theme
    pub theme: Theme,
    /// Clipboard manager
    pub clipboard: ClipboardManager,
    /// Chat store and current view
    pub controller: ChatController,
    /// Hit test registry for mouse interaction, rebuilt every frame
    pub hit_registry: HitTestRegistry,
}

impl TuiApp {
    /// Take over the terminal and start on the chat list
    pub fn new(store: ChatStore) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )
        .context("Failed to set up terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            events: Some(EventHandler::new(POLL_INTERVAL)),
            should_quit: false,
            theme: Theme::dark(),
            clipboard: ClipboardManager::new(),
            controller: ChatController::new(store),
            hit_registry: HitTestRegistry::new(),
        })
    }

    /// Run the main event loop
    pub async fn run(&mut self) -> Result<()> {
        // Take events out of self to avoid borrow conflicts while awaiting
        let mut events = self.events.take().context("Event handler already running")?;
        tracing::info!(chats = self.controller.store().len(), "TUI started");

        while !self.should_quit {
            self.terminal.draw(|frame| {
                ui::render(
                    frame,
                    &mut self.controller,
                    &mut self.hit_registry,
                    &self.theme,
                )
            })?;

            match events.next().await {
                Some(event) => self.handle_event(event),
                None => {
                    tracing::warn!("Input closed, exiting");
                    break;
                }
            }
        }

        self.events = Some(events);
        tracing::info!("TUI stopped");
        Ok(())
    }

    /// Handle an application event
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Click { row, col } => {
                if let Some(target) = self.hit_registry.hit_test(col, row) {
                    tracing::trace!(?target, "click");
                    self.apply(target.action());
                }
            }
            AppEvent::ScrollUp => self.apply(self.wheel_action(true)),
            AppEvent::ScrollDown => self.apply(self.wheel_action(false)),
            // Next loop iteration redraws at the new size
            AppEvent::Resize(..) => {}
            AppEvent::Paste(text) => self.paste(&text),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let screen = self.controller.screen();
        if let Some(action) = key_action(screen, &key) {
            self.apply(action);
            return;
        }

        if screen != Screen::New {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('v') {
            if let Some(text) = self.clipboard.paste() {
                self.paste(&text);
            }
            return;
        }
        if let View::New(form) = self.controller.view_mut() {
            form.input(key);
        }
    }

    /// The wheel moves the highlight on the list and scrolls elsewhere.
    fn wheel_action(&self, up: bool) -> Action {
        match (self.controller.screen(), up) {
            (Screen::List, true) => Action::SelectPrevious,
            (Screen::List, false) => Action::SelectNext,
            (_, true) => Action::ScrollUp,
            (_, false) => Action::ScrollDown,
        }
    }

    fn apply(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
        } else {
            self.controller.dispatch(action);
        }
    }

    fn paste(&mut self, text: &str) {
        if let View::New(form) = self.controller.view_mut() {
            form.paste(text);
        }
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal in reverse order of setup
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}
