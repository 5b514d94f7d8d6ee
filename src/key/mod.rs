//! Key representation for list navigation input
//!
//! The crate never reads the terminal itself; the caller owns the event
//! loop and hands each key press to [`Key::from_event`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single key press, decoupled from the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Navigation keys
    Home,
    End,
    PageUp,
    PageDown,
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
}

impl Key {
    /// Translate a crossterm `KeyEvent` into a `Key`
    ///
    /// Returns `None` for key releases and repeats, control chords, and
    /// keys the list has no use for (function keys, media keys).
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        match event.code {
            KeyCode::Char(ch) => {
                // Some terminals deliver Enter as a raw '\r' or '\n'
                if ch == '\r' || ch == '\n' {
                    return Some(Key::Enter);
                }
                if event.modifiers.contains(KeyModifiers::CONTROL) {
                    // Control chords are not characters
                    return None;
                }
                Some(Key::Char(ch))
            }
            KeyCode::Up => Some(Key::ArrowUp),
            KeyCode::Down => Some(Key::ArrowDown),
            KeyCode::Left => Some(Key::ArrowLeft),
            KeyCode::Right => Some(Key::ArrowRight),
            KeyCode::Home => Some(Key::Home),
            KeyCode::End => Some(Key::End),
            KeyCode::PageUp => Some(Key::PageUp),
            KeyCode::PageDown => Some(Key::PageDown),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Delete => Some(Key::Delete),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            KeyCode::Tab => Some(Key::Tab),
            _ => None,
        }
    }
}
