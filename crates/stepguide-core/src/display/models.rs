//! Display implementations for domain models.

use std::fmt;

use crate::models::{NavigationState, Note, Position};

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatted_timestamp() {
            Some(stamp) => write!(f, "**{stamp}** {}", self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Welcome => write!(f, "welcome"),
            Position::Step(index) => write!(f, "step {}", index + 1),
        }
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let back = if self.can_go_back { "◀ prev" } else { "◁ prev" };
        let forward = if self.can_go_forward { "next ▶" } else { "next ▷" };
        write!(f, "{back} | {forward}")
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_note_display() {
        let note = Note::new("Use the long screw", date(2024, 2, 29).at(14, 5, 0, 0));
        assert_eq!(note.to_string(), "**29.02.2024 14:05** Use the long screw");

        let legacy = Note::parse_line("old note");
        assert_eq!(legacy.to_string(), "old note");
    }

    #[test]
    fn test_navigation_display() {
        let state = NavigationState {
            can_go_back: false,
            can_go_forward: true,
        };
        assert_eq!(state.to_string(), "◁ prev | next ▶");
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::Welcome.to_string(), "welcome");
        assert_eq!(Position::Step(0).to_string(), "step 1");
    }
}
