//! Key bindings for list navigation
//!
//! Maps key presses onto abstract navigation intents through a
//! caller-configurable binding table. Resolution is pure classification:
//! the caller applies the resulting intent to a view.
//!
//! ## `keymap`/ Invariants
//!
//! - One input event resolves to at most one intent.
//! - Intents are tested in a fixed priority order (scroll down, scroll up,
//!   page down, page up); overlapping bindings resolve by that order, never
//!   by configuration order.
//! - Named-key tokens parse case-insensitively; literal character tokens
//!   match case-sensitively.
//! - Unparseable tokens are rejected when the table is built, not ignored
//!   at match time.

use std::str::FromStr;

use crate::error::{ConfigError, Result};
use crate::key::Key;

/// An abstract navigation command, decoupled from the key that triggered it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIntent {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}

/// A well-known key a binding token can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Space,
    Tab,
    Backspace,
    Delete,
    PageUp,
    PageDown,
    Home,
    End,
}

impl NamedKey {
    /// Parse a key name, case-insensitively
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "return" | "enter" => Some(Self::Enter),
            "escape" | "esc" => Some(Self::Escape),
            "space" => Some(Self::Space),
            "tab" => Some(Self::Tab),
            "backspace" => Some(Self::Backspace),
            "delete" => Some(Self::Delete),
            "pageup" => Some(Self::PageUp),
            "pagedown" => Some(Self::PageDown),
            "home" => Some(Self::Home),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    /// Whether a key press is the key this name refers to
    fn matches(self, key: Key) -> bool {
        match self {
            Self::Up => key == Key::ArrowUp,
            Self::Down => key == Key::ArrowDown,
            Self::Left => key == Key::ArrowLeft,
            Self::Right => key == Key::ArrowRight,
            Self::Enter => key == Key::Enter,
            Self::Escape => key == Key::Escape,
            Self::Space => key == Key::Char(' '),
            Self::Tab => key == Key::Tab,
            Self::Backspace => key == Key::Backspace,
            Self::Delete => key == Key::Delete,
            Self::PageUp => key == Key::PageUp,
            Self::PageDown => key == Key::PageDown,
            Self::Home => key == Key::Home,
            Self::End => key == Key::End,
        }
    }
}

/// One entry in a binding list: a named key or a literal character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    /// A well-known named key, matched regardless of spelling case
    Named(NamedKey),
    /// A literal character, matched case-sensitively
    Char(char),
}

impl KeyToken {
    /// Whether a key press matches this token
    #[must_use]
    pub fn matches(&self, key: Key) -> bool {
        match *self {
            Self::Named(named) => named.matches(key),
            Self::Char(c) => key == Key::Char(c),
        }
    }
}

impl FromStr for KeyToken {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(named) = NamedKey::from_name(s) {
            return Ok(Self::Named(named));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Char(c)),
            _ => Err(ConfigError::UnknownKeyToken {
                token: s.to_string(),
            }),
        }
    }
}

/// The binding table: accepted tokens per navigation intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    scroll_up: Vec<KeyToken>,
    scroll_down: Vec<KeyToken>,
    page_up: Vec<KeyToken>,
    page_down: Vec<KeyToken>,
}

impl Default for KeyBindings {
    /// Arrow keys plus vi-style j/k, and the page keys
    fn default() -> Self {
        KeyBindings {
            scroll_up: vec![KeyToken::Named(NamedKey::Up), KeyToken::Char('k')],
            scroll_down: vec![KeyToken::Named(NamedKey::Down), KeyToken::Char('j')],
            page_up: vec![KeyToken::Named(NamedKey::PageUp)],
            page_down: vec![KeyToken::Named(NamedKey::PageDown)],
        }
    }
}

impl KeyBindings {
    /// Create the default table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a whole table from caller-supplied token strings
    ///
    /// Every list is parsed up front; the first bad token aborts the whole
    /// table with `UnknownKeyToken`.
    pub fn parse(
        scroll_up: &[&str],
        scroll_down: &[&str],
        page_up: &[&str],
        page_down: &[&str],
    ) -> Result<Self> {
        Ok(KeyBindings {
            scroll_up: Self::parse_tokens(scroll_up)?,
            scroll_down: Self::parse_tokens(scroll_down)?,
            page_up: Self::parse_tokens(page_up)?,
            page_down: Self::parse_tokens(page_down)?,
        })
    }

    /// Replace the binding list for one intent with parsed tokens
    ///
    /// Intents left untouched keep their current bindings, so callers can
    /// override a single intent and inherit the defaults for the rest.
    pub fn bind(mut self, intent: NavIntent, tokens: &[&str]) -> Result<Self> {
        *self.slot_mut(intent) = Self::parse_tokens(tokens)?;
        Ok(self)
    }

    /// Resolve one key press to at most one intent
    ///
    /// Tested in fixed priority order: scroll down, scroll up, page down,
    /// page up. A key bound to several intents always resolves to the
    /// highest-priority one.
    #[must_use]
    pub fn resolve(&self, key: Key) -> Option<NavIntent> {
        if Self::any_match(&self.scroll_down, key) {
            return Some(NavIntent::ScrollDown);
        }
        if Self::any_match(&self.scroll_up, key) {
            return Some(NavIntent::ScrollUp);
        }
        if Self::any_match(&self.page_down, key) {
            return Some(NavIntent::PageDown);
        }
        if Self::any_match(&self.page_up, key) {
            return Some(NavIntent::PageUp);
        }
        None
    }

    /// The tokens currently bound to an intent
    #[must_use]
    pub fn bound(&self, intent: NavIntent) -> &[KeyToken] {
        match intent {
            NavIntent::ScrollUp => &self.scroll_up,
            NavIntent::ScrollDown => &self.scroll_down,
            NavIntent::PageUp => &self.page_up,
            NavIntent::PageDown => &self.page_down,
        }
    }

    fn parse_tokens(tokens: &[&str]) -> Result<Vec<KeyToken>> {
        tokens.iter().map(|token| token.parse()).collect()
    }

    fn slot_mut(&mut self, intent: NavIntent) -> &mut Vec<KeyToken> {
        match intent {
            NavIntent::ScrollUp => &mut self.scroll_up,
            NavIntent::ScrollDown => &mut self.scroll_down,
            NavIntent::PageUp => &mut self.page_up,
            NavIntent::PageDown => &mut self.page_down,
        }
    }

    fn any_match(tokens: &[KeyToken], key: Key) -> bool {
        tokens.iter().any(|token| token.matches(key))
    }
}
