//! Tests for configuration errors

use crate::error::ConfigError;

#[test]
fn test_window_too_small_display() {
    let err = ConfigError::WindowTooSmall { given: 1 };
    assert_eq!(err.to_string(), "window size must be at least 2, got 1");
}

#[test]
fn test_unknown_key_token_display() {
    let err = ConfigError::UnknownKeyToken {
        token: "pgup".to_string(),
    };
    assert!(err.to_string().contains("pgup"));
}

#[test]
fn test_glyph_width_display() {
    let err = ConfigError::GlyphWidth { glyph: '見' };
    assert!(err.to_string().contains('見'));
}

#[test]
fn test_errors_are_comparable() {
    assert_eq!(
        ConfigError::WindowTooSmall { given: 0 },
        ConfigError::WindowTooSmall { given: 0 }
    );
    assert_ne!(
        ConfigError::WindowTooSmall { given: 0 },
        ConfigError::WindowTooSmall { given: 1 }
    );
}
