//! # TUI Event Handling
//!
//! Keyboard input and tick event handling.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// TUI events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for periodic redraws
    Tick,
}

/// Event handler that combines keyboard and tick events
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn keyboard event handler
        std::thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else {
                    // Send tick on poll timeout
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        EventHandler { rx }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action
    None,
    /// Quit the application
    Quit,
    /// Select previous persona
    PrevPersona,
    /// Select next persona
    NextPersona,
    /// Start editing the text area
    StartEditing,
    /// Leave the text area
    StopEditing,
    /// Send the form
    Submit,
    /// Character input
    Char(char),
    /// Line break in the text area
    Newline,
    /// Backspace
    Backspace,
    /// Show or hide the help panel
    ToggleHelp,
    /// Scroll answer up
    ScrollUp,
    /// Scroll answer down
    ScrollDown,
}

/// Map a key event to an action
pub fn map_key_event(key: KeyEvent, in_edit_mode: bool) -> KeyAction {
    // Always available
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            KeyCode::Char('s') => KeyAction::Submit,
            _ => KeyAction::None,
        };
    }

    if in_edit_mode {
        // In edit mode, handle text input
        match key.code {
            KeyCode::Esc => KeyAction::StopEditing,
            KeyCode::Enter => KeyAction::Newline,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Tab => KeyAction::NextPersona,
            KeyCode::BackTab => KeyAction::PrevPersona,
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        }
    } else {
        // Normal mode navigation
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('?') => KeyAction::ToggleHelp,

            // Persona selection
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => KeyAction::PrevPersona,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => KeyAction::NextPersona,

            // Form
            KeyCode::Char('i') | KeyCode::Char('e') => KeyAction::StartEditing,
            KeyCode::Enter | KeyCode::Char('s') => KeyAction::Submit,

            // Answer scrolling
            KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,

            _ => KeyAction::None,
        }
    }
}
