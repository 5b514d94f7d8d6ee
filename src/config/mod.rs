//! Configuration surface for a scrollable list
//!
//! Plain data with stated defaults; every knob is optional for the caller.
//! Validation is fail-fast: a bad window size or a wide scroll bar glyph is
//! a programming error surfaced before the list is ever shown.

use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

use crate::error::{ConfigError, Result};
use crate::keymap::KeyBindings;
use crate::scroll_view::{DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE};

/// Which side of the list the scroll bar sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBarSide {
    Left,
    Right,
}

/// Border decoration around the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Plain box-drawing lines
    Single,
    /// Double box-drawing lines
    Double,
    /// Rounded corners
    Round,
    /// Heavy box-drawing lines
    Bold,
    /// ASCII `+-|` borders
    Classic,
    /// No border at all
    None,
}

impl BorderStyle {
    /// Whether this style draws anything
    #[must_use]
    pub fn has_border(self) -> bool {
        !matches!(self, BorderStyle::None)
    }
}

/// Scroll bar appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBarConfig {
    /// Whether the bar is drawn at all
    pub visible: bool,
    /// Which side of the list it occupies
    pub side: ScrollBarSide,
    /// The thumb glyph; must be exactly one column wide
    pub glyph: char,
    /// Thumb color; `None` falls back to white
    pub fg: Option<Color>,
    /// Track color; `None` falls back to dark grey
    pub bg: Option<Color>,
}

impl Default for ScrollBarConfig {
    fn default() -> Self {
        ScrollBarConfig {
            visible: true,
            side: ScrollBarSide::Right,
            glyph: '█',
            fg: None,
            bg: None,
        }
    }
}

impl ScrollBarConfig {
    /// The color to draw the thumb with
    #[must_use]
    pub fn thumb_color(&self) -> Color {
        self.fg.unwrap_or(Color::White)
    }

    /// The color to draw the track with
    #[must_use]
    pub fn track_color(&self) -> Color {
        self.bg.unwrap_or(Color::DarkGrey)
    }
}

/// Border appearance, including the focus treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderConfig {
    pub style: BorderStyle,
    /// Border color while the list is unfocused; `None` falls back to white
    pub color: Option<Color>,
    /// Border color while the list holds focus; `None` falls back to blue
    pub focused_color: Option<Color>,
}

impl Default for BorderConfig {
    fn default() -> Self {
        BorderConfig {
            style: BorderStyle::Round,
            color: None,
            focused_color: None,
        }
    }
}

impl BorderConfig {
    /// The color to draw with for the current focus state
    #[must_use]
    pub fn color_for(&self, focused: bool) -> Color {
        if focused {
            self.focused_color.unwrap_or(Color::Blue)
        } else {
            self.color.unwrap_or(Color::White)
        }
    }
}

/// Everything a caller can tune about a scrollable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Items visible at once
    pub window_size: usize,
    pub scroll_bar: ScrollBarConfig,
    pub border: BorderConfig,
    pub bindings: KeyBindings,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            scroll_bar: ScrollBarConfig::default(),
            border: BorderConfig::default(),
            bindings: KeyBindings::default(),
        }
    }
}

impl ListConfig {
    /// Defaults for every knob
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of items visible at once
    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Replace the scroll bar appearance
    #[must_use]
    pub fn with_scroll_bar(mut self, scroll_bar: ScrollBarConfig) -> Self {
        self.scroll_bar = scroll_bar;
        self
    }

    /// Replace the border appearance
    #[must_use]
    pub fn with_border(mut self, border: BorderConfig) -> Self {
        self.border = border;
        self
    }

    /// Replace the key binding table
    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Reject configurations the list cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.window_size < MIN_WINDOW_SIZE {
            return Err(ConfigError::WindowTooSmall {
                given: self.window_size,
            });
        }
        // A wide thumb would shear the column layout
        if self.scroll_bar.glyph.width() != Some(1) {
            return Err(ConfigError::GlyphWidth {
                glyph: self.scroll_bar.glyph,
            });
        }
        Ok(())
    }
}
