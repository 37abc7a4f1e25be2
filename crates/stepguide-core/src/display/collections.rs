//! Collection wrapper types for displaying groups of domain objects.
//!
//! Both wrappers borrow their items and handle the empty case with a fixed
//! message.

use std::fmt;

use crate::models::{Note, Step};

/// Numbered list of a step's notes, numbered from 1.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use stepguide_core::{display::Notes, models::Note};
///
/// let notes = vec![Note::new("Check alignment", date(2024, 4, 1).at(10, 0, 0, 0))];
/// let output = Notes(&notes).to_string();
/// assert_eq!(output, "1. **01.04.2024 10:00** Check alignment\n");
/// ```
pub struct Notes<'a>(pub &'a [Note]);

impl fmt::Display for Notes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No notes for this step.");
        }
        for (position, note) in self.0.iter().enumerate() {
            writeln!(f, "{}. {note}", position + 1)?;
        }
        Ok(())
    }
}

/// Overview of all discovered steps, one line per step.
///
/// Steps without a description file are marked so missing text is easy to
/// spot before a session.
pub struct StepList<'a>(pub &'a [Step]);

impl fmt::Display for StepList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No steps found.");
        }
        for step in self.0 {
            let marker = if step.has_description() {
                ""
            } else {
                " (no description)"
            };
            writeln!(f, "{}. {}{marker}", step.number(), step.image_name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_notes_display_empty() {
        assert_eq!(Notes(&[]).to_string(), "No notes for this step.\n");
    }

    #[test]
    fn test_notes_display_numbering() {
        let notes = vec![
            Note::new("first", date(2024, 1, 1).at(0, 0, 0, 0)),
            Note::parse_line("second"),
        ];
        let output = Notes(&notes).to_string();
        assert_eq!(output, "1. **01.01.2024 00:00** first\n2. second\n");
    }

    #[test]
    fn test_step_list_display() {
        assert_eq!(StepList(&[]).to_string(), "No steps found.\n");

        let steps = vec![
            Step::from_image(0, PathBuf::from("/nonexistent/a.png")),
            Step::from_image(1, PathBuf::from("/nonexistent/b.jpg")),
        ];
        let output = StepList(&steps).to_string();
        assert!(output.contains("1. a.png (no description)"));
        assert!(output.contains("2. b.jpg (no description)"));
    }
}
