//! Handler functions shared by every interface.
//!
//! Each handler runs one complete workflow against a [`Guide`]: it validates
//! that the referenced step exists, performs the operation and returns data
//! the caller formats with the [`display`](crate::display) types.
//!
//! ```text
//! Interface → Handler → StepCollection / NotesStore → Models
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use stepguide_core::{handlers::handle_add_note, params::AddNote, GuideBuilder};
//! # fn example() -> stepguide_core::Result<()> {
//! let guide = GuideBuilder::new().with_resources_dir(Some("resources")).build()?;
//! let change = handle_add_note(
//!     &guide,
//!     &AddNote { step_index: 0, text: "Screw 4 is missing".to_string() },
//! )?;
//! println!("{change}");
//! # Ok(())
//! # }
//! ```

use crate::{
    collection::{Description, StepCollection},
    display::{NoteChange, NoteChangeKind},
    error::{GuideError, Result},
    guide::Guide,
    models::{Note, Step},
    params::{AddNote, DeleteNote, EditNote, ImportNotes, StepRef},
};

/// A resolved step ready to render.
#[derive(Debug, Clone)]
pub struct StepDetails {
    pub step: Step,
    pub description: Description,
    pub total: usize,
}

/// Handle showing one step with its resolved description.
///
/// # Errors
///
/// Returns [`GuideError::InvalidStep`] if the step does not exist.
pub fn handle_show_step(guide: &Guide, params: &StepRef) -> Result<StepDetails> {
    let collection = guide.steps();
    let step = require_step(&collection, params.step_index)?.clone();
    let description = collection.describe(&step);
    Ok(StepDetails {
        step,
        description,
        total: collection.len(),
    })
}

/// Handle listing the notes of a step.
///
/// # Errors
///
/// Returns [`GuideError::InvalidStep`] if the step does not exist.
pub fn handle_list_notes(guide: &Guide, params: &StepRef) -> Result<Vec<Note>> {
    require_step(&guide.steps(), params.step_index)?;
    Ok(guide.notes(params.step_index).notes().to_vec())
}

/// Handle adding a note to a step.
///
/// # Errors
///
/// Returns [`GuideError::InvalidStep`], [`GuideError::EmptyInput`] or a
/// file system error from saving.
pub fn handle_add_note(guide: &Guide, params: &AddNote) -> Result<NoteChange> {
    require_step(&guide.steps(), params.step_index)?;
    let mut store = guide.notes(params.step_index);
    let note = store.add(&params.text)?.clone();
    let position = store.len() - 1;
    store.close()?;
    Ok(NoteChange {
        kind: NoteChangeKind::Added,
        step_number: params.step_index + 1,
        position,
        note,
    })
}

/// Handle editing a note of a step.
///
/// # Errors
///
/// Returns [`GuideError::InvalidStep`], [`GuideError::InvalidPosition`],
/// [`GuideError::EmptyInput`] or a file system error from saving.
pub fn handle_edit_note(guide: &Guide, params: &EditNote) -> Result<NoteChange> {
    require_step(&guide.steps(), params.step_index)?;
    let mut store = guide.notes(params.step_index);
    let note = store.edit(params.position, &params.text)?.clone();
    store.close()?;
    Ok(NoteChange {
        kind: NoteChangeKind::Edited,
        step_number: params.step_index + 1,
        position: params.position,
        note,
    })
}

/// Handle deleting a note of a step.
///
/// # Errors
///
/// Returns [`GuideError::InvalidStep`], [`GuideError::InvalidPosition`] or a
/// file system error from saving.
pub fn handle_delete_note(guide: &Guide, params: &DeleteNote) -> Result<NoteChange> {
    require_step(&guide.steps(), params.step_index)?;
    let mut store = guide.notes(params.step_index);
    let note = store.delete(params.position)?;
    store.close()?;
    Ok(NoteChange {
        kind: NoteChangeKind::Deleted,
        step_number: params.step_index + 1,
        position: params.position,
        note,
    })
}

/// Handle exporting the notes of a step as text.
///
/// # Errors
///
/// Returns [`GuideError::InvalidStep`] if the step does not exist.
pub fn handle_export_notes(guide: &Guide, params: &StepRef) -> Result<String> {
    require_step(&guide.steps(), params.step_index)?;
    Ok(guide.notes(params.step_index).export_text())
}

/// Handle replacing the notes of a step from exported text.
///
/// Returns the number of imported notes.
///
/// # Errors
///
/// Returns [`GuideError::InvalidStep`] or a file system error from saving.
pub fn handle_import_notes(guide: &Guide, params: &ImportNotes) -> Result<usize> {
    require_step(&guide.steps(), params.step_index)?;
    let mut store = guide.notes(params.step_index);
    let count = store.import_text(&params.text)?;
    store.close()?;
    Ok(count)
}

fn require_step(collection: &StepCollection, step_index: usize) -> Result<&Step> {
    collection.get(step_index).ok_or(GuideError::InvalidStep {
        number: step_index + 1,
        count: collection.len(),
    })
}
