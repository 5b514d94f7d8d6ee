//! Scrollpane - windowed list state for terminal UIs
//!
//! The core is an immutable window over a borrowed item collection:
//! navigation produces new [`ScrollView`] values, a [`KeyBindings`] table
//! turns key presses into [`NavIntent`]s, and [`ScrollBarState`] derives
//! indicator placement. Rendering and terminal I/O stay with the caller.

pub mod config;
pub mod error;
pub mod indicator;
pub mod item;
pub mod key;
pub mod keymap;
pub mod layout;
pub mod scroll_view;

pub use config::{BorderConfig, BorderStyle, ListConfig, ScrollBarConfig, ScrollBarSide};
pub use error::ConfigError;
pub use indicator::ScrollBarState;
pub use item::ListItem;
pub use key::Key;
pub use keymap::{KeyBindings, KeyToken, NamedKey, NavIntent};
pub use scroll_view::ScrollView;
