//! Tests for the text width budget

use crate::config::BorderStyle;
use crate::layout::safe_text_width;

#[test]
fn test_border_and_scroll_bar_subtract() {
    // 80 - 4 (border) - 2 (scroll bar)
    assert_eq!(safe_text_width(80, true, BorderStyle::Round), 74);
}

#[test]
fn test_border_only() {
    assert_eq!(safe_text_width(80, false, BorderStyle::Round), 76);
    assert_eq!(safe_text_width(80, false, BorderStyle::Double), 76);
}

#[test]
fn test_scroll_bar_only() {
    assert_eq!(safe_text_width(80, true, BorderStyle::None), 78);
}

#[test]
fn test_undecorated() {
    assert_eq!(safe_text_width(80, false, BorderStyle::None), 80);
}

#[test]
fn test_narrow_terminal_floors_at_minimum() {
    // 12 - 4 - 2 = 6, floored to 10
    assert_eq!(safe_text_width(12, true, BorderStyle::Round), 10);
    assert_eq!(safe_text_width(0, true, BorderStyle::Round), 10);
    assert_eq!(safe_text_width(3, false, BorderStyle::None), 10);
}
