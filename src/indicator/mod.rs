//! Scroll bar placement derived from a view
//!
//! Pure geometry: where the thumb sits and whether the bar means anything.
//! Drawing, and the decision to suppress or dim an inactive bar, belong to
//! the caller.

use crate::scroll_view::ScrollView;

/// Thumb placement for a one-column scroll bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBarState {
    /// Highest thumb offset: one less than the window height, so one cell
    /// stays reserved at the end of the travel
    pub track: usize,
    /// Rows above the thumb, in `0..=track`
    pub offset: usize,
    /// True when the collection is fully visible and the bar shows nothing
    pub inactive: bool,
}

impl ScrollBarState {
    /// Derive thumb placement from a view
    #[must_use]
    pub fn of<T>(view: &ScrollView<'_, T>) -> Self {
        let track = view.window_size() - 1;
        let offset = track * usize::from(view.progress()) / 100;
        ScrollBarState {
            track,
            offset,
            inactive: view.is_fully_visible(),
        }
    }
}
