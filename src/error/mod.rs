//! Error types for list construction and configuration
//!
//! Only construction-time validation can fail. Navigation never errors:
//! boundary moves saturate instead, since scrolling past an edge is a
//! normal user action.

use std::fmt;

/// A configuration rejected at construction or validation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Window size below the minimum of 2
    WindowTooSmall {
        /// The size the caller asked for
        given: usize,
    },
    /// Key binding token that is neither a named key nor a single character
    UnknownKeyToken {
        /// The offending token, verbatim
        token: String,
    },
    /// Scroll bar glyph that does not occupy exactly one terminal column
    GlyphWidth {
        /// The offending glyph
        glyph: char,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowTooSmall { given } => {
                write!(f, "window size must be at least 2, got {given}")
            }
            Self::UnknownKeyToken { token } => {
                write!(f, "unrecognized key token {token:?}")
            }
            Self::GlyphWidth { glyph } => {
                write!(f, "scroll bar glyph {glyph:?} must be one column wide")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result alias for fallible construction and validation
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
