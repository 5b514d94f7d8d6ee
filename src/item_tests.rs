use super::*;
use std::fmt;

struct Track {
    id: u32,
    title: &'static str,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl ListItem for Track {
    fn identity(&self) -> String {
        self.id.to_string()
    }
}

#[test]
fn test_identity_defaults_to_display_string() {
    let item = String::from("alpha");
    assert_eq!(item.identity(), "alpha");
    assert_eq!("beta".identity(), "beta");
}

#[test]
fn test_identity_can_be_overridden() {
    let track = Track {
        id: 7,
        title: "So What",
    };
    assert_eq!(track.to_string(), "So What");
    assert_eq!(track.identity(), "7");
}
