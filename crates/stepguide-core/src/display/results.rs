//! Result wrapper types for displaying note mutations.

use std::fmt;

use crate::models::Note;

/// The kind of change applied to a step's notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteChangeKind {
    Added,
    Edited,
    Deleted,
}

impl NoteChangeKind {
    fn verb(self) -> &'static str {
        match self {
            NoteChangeKind::Added => "Added",
            NoteChangeKind::Edited => "Updated",
            NoteChangeKind::Deleted => "Deleted",
        }
    }
}

/// Confirmation of a note mutation, showing the affected note.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use stepguide_core::{
///     display::{NoteChange, NoteChangeKind},
///     models::Note,
/// };
///
/// let note = Note::new("Missing washer", date(2024, 6, 1).at(12, 0, 0, 0));
/// let change = NoteChange {
///     kind: NoteChangeKind::Added,
///     step_number: 3,
///     position: 0,
///     note,
/// };
/// assert!(change.to_string().starts_with("Added note 1 on step 3"));
/// ```
#[derive(Debug)]
pub struct NoteChange {
    pub kind: NoteChangeKind,
    /// 1-based step number
    pub step_number: usize,
    /// 0-based position of the note
    pub position: usize,
    pub note: Note,
}

impl fmt::Display for NoteChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} note {} on step {}",
            self.kind.verb(),
            self.position + 1,
            self.step_number
        )?;
        writeln!(f)?;
        writeln!(f, "- {}", self.note)
    }
}
