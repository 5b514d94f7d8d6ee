//! Item capability trait for list elements

use std::fmt::Display;

/// Capability an item needs before a renderer can draw it
///
/// The display string comes from the `Display` supertrait. `identity`
/// supplies a stable token for UI diffing and render keys; when an item
/// has no natural identity the display string doubles as one.
pub trait ListItem: Display {
    /// Stable identity token for this item
    fn identity(&self) -> String {
        self.to_string()
    }
}

impl ListItem for String {}
impl ListItem for &str {}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
