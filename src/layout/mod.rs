//! Column budget for list text
//!
//! Terminal width is an explicit parameter so the computation stays pure;
//! callers typically feed it from `crossterm::terminal::size`.

use crate::config::BorderStyle;

/// Columns consumed by a border: two edges plus their inner padding
pub const BORDER_COLS: u16 = 4;

/// Columns consumed by the scroll bar: the thumb column plus a gap
pub const SCROLL_BAR_COLS: u16 = 2;

/// Floor for the text budget, however narrow the terminal gets
pub const MIN_TEXT_WIDTH: u16 = 10;

/// Columns left for item text after decoration
///
/// Subtracts the border and scroll bar budgets from the terminal width,
/// never returning less than [`MIN_TEXT_WIDTH`].
#[must_use]
pub fn safe_text_width(term_width: u16, scroll_bar: bool, border: BorderStyle) -> u16 {
    let mut width = term_width;
    if border.has_border() {
        width = width.saturating_sub(BORDER_COLS);
    }
    if scroll_bar {
        width = width.saturating_sub(SCROLL_BAR_COLS);
    }
    width.max(MIN_TEXT_WIDTH)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
