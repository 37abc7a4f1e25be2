//! Parameter structures for step guide operations.
//!
//! These structures carry requests from an interface (the CLI, the
//! interactive browser) to the [`handlers`](crate::handlers) without any
//! framework-specific derives. Interface layers define their own argument
//! types and convert them with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Handlers     │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│ (collection,    │
//! │                 │    │                 │    │  notes store)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All indices here are 0-based; converting from the 1-based numbers shown
//! to users is the interface's job.

/// Identifies a step by its 0-based index.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepRef {
    pub step_index: usize,
}

/// Parameters for adding a note to a step.
#[derive(Debug, Clone, Default)]
pub struct AddNote {
    pub step_index: usize,
    /// Raw note text; trimmed and flattened before storing
    pub text: String,
}

/// Parameters for replacing the text of an existing note.
#[derive(Debug, Clone, Default)]
pub struct EditNote {
    pub step_index: usize,
    /// 0-based position of the note within the step
    pub position: usize,
    pub text: String,
}

/// Parameters for deleting a note.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteNote {
    pub step_index: usize,
    /// 0-based position of the note within the step
    pub position: usize,
}

/// Parameters for replacing all notes of a step from exported text.
#[derive(Debug, Clone, Default)]
pub struct ImportNotes {
    pub step_index: usize,
    /// Notes in stored line format, one per line
    pub text: String,
}
