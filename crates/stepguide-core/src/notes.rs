//! Per-step notes persisted as one line-oriented text file per step.
//!
//! Every mutation rewrites the whole file. The store is saved again when it is
//! closed, and on drop if a previous save failed, so the file always matches
//! the last in-memory state.

use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use jiff::civil::DateTime;
use log::{debug, warn};

use crate::{
    error::{GuideError, IoResultExt, Result},
    models::{normalize_text, Note},
};

/// The ordered notes of a single step, backed by `notes_step<N>.txt`.
#[derive(Debug)]
pub struct NotesStore {
    path: PathBuf,
    notes: Vec<Note>,
    dirty: bool,
    load_error: Option<io::Error>,
}

impl NotesStore {
    /// File name of the notes file for the step at `step_index`.
    pub fn file_name(step_index: usize) -> String {
        format!("notes_step{}.txt", step_index + 1)
    }

    /// Opens the notes of the step at `step_index` under `root`.
    ///
    /// A missing file yields an empty list. Bytes that are not valid UTF-8
    /// are decoded lossily so every line is kept. A file that exists but
    /// cannot be read also yields an empty list, and the store then refuses
    /// to [`save`](Self::save) over it.
    pub fn open(root: impl AsRef<Path>, step_index: usize) -> Self {
        let path = root.as_ref().join(Self::file_name(step_index));
        let (notes, load_error) = match fs::read(&path) {
            Ok(bytes) => (parse_notes(&String::from_utf8_lossy(&bytes)), None),
            Err(e) if e.kind() == ErrorKind::NotFound => (Vec::new(), None),
            Err(e) => {
                warn!("Cannot read notes file {}: {e}", path.display());
                (Vec::new(), Some(e))
            }
        };
        debug!("Loaded {} notes from {}", notes.len(), path.display());

        Self {
            path,
            notes,
            dirty: false,
            load_error,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a note stamped with the current time and saves.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::EmptyInput`] for blank text, leaving the list
    /// unchanged. Returns [`GuideError::FileSystem`] if saving fails; the
    /// note stays in memory so a later [`save`](Self::save) can retry.
    pub fn add(&mut self, text: &str) -> Result<&Note> {
        self.add_at(text, jiff::Zoned::now().datetime())
    }

    /// Same as [`add`](Self::add) with an explicit timestamp.
    pub fn add_at(&mut self, text: &str, timestamp: DateTime) -> Result<&Note> {
        let text = normalize_text(text)?;
        self.notes.push(Note::new(text, timestamp));
        self.dirty = true;
        self.save()?;
        let position = self.notes.len() - 1;
        Ok(&self.notes[position])
    }

    /// Replaces the text of the note at `position`, re-stamps it with the
    /// current time and saves.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidPosition`] for an out-of-range position,
    /// [`GuideError::EmptyInput`] for blank text, and
    /// [`GuideError::FileSystem`] if saving fails.
    pub fn edit(&mut self, position: usize, text: &str) -> Result<&Note> {
        self.edit_at(position, text, jiff::Zoned::now().datetime())
    }

    /// Same as [`edit`](Self::edit) with an explicit timestamp.
    pub fn edit_at(&mut self, position: usize, text: &str, timestamp: DateTime) -> Result<&Note> {
        self.check_position(position)?;
        let text = normalize_text(text)?;
        self.notes[position] = Note::new(text, timestamp);
        self.dirty = true;
        self.save()?;
        Ok(&self.notes[position])
    }

    /// Removes the note at `position` and saves the remaining list.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidPosition`] for an out-of-range position
    /// and [`GuideError::FileSystem`] if saving fails.
    pub fn delete(&mut self, position: usize) -> Result<Note> {
        self.check_position(position)?;
        let removed = self.notes.remove(position);
        self.dirty = true;
        self.save()?;
        Ok(removed)
    }

    /// All notes in their stored line format, joined by newlines.
    pub fn export_text(&self) -> String {
        self.notes
            .iter()
            .map(Note::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replaces the whole list with the notes in `text` and saves.
    ///
    /// Lines are parsed like the notes file itself; lines without text are
    /// skipped.
    /// Returns the number of imported notes.
    pub fn import_text(&mut self, text: &str) -> Result<usize> {
        self.notes = parse_notes(text);
        self.dirty = true;
        self.save()?;
        Ok(self.notes.len())
    }

    /// Rewrites the backing file from the in-memory list.
    ///
    /// The containing directory is created if needed and the file is replaced
    /// through a temporary sibling, so readers never see a partial write.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::FileSystem`] if the directory or file cannot be
    /// written, or if the existing file could not be read when the store was
    /// opened.
    pub fn save(&mut self) -> Result<()> {
        if let Some(e) = &self.load_error {
            return Err(GuideError::FileSystem {
                path: self.path.clone(),
                source: io::Error::new(
                    e.kind(),
                    format!("refusing to overwrite unreadable notes: {e}"),
                ),
            });
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).fs_context(parent)?;
        }

        let mut content = String::new();
        for note in &self.notes {
            content.push_str(&note.to_line());
            content.push('\n');
        }

        let tmp_path = self.path.with_extension("txt.tmp");
        fs::write(&tmp_path, content).fs_context(&tmp_path)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).fs_context(&self.path);
        }
        self.dirty = false;
        debug!("Saved {} notes to {}", self.notes.len(), self.path.display());
        Ok(())
    }

    /// Saves one last time and releases the store.
    pub fn close(mut self) -> Result<()> {
        self.save()
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.notes.len() {
            Ok(())
        } else {
            Err(GuideError::invalid_position(position, self.notes.len()))
        }
    }
}

impl Drop for NotesStore {
    fn drop(&mut self) {
        if !self.dirty {
            return;
        }
        if let Err(e) = self.save() {
            warn!("Failed to save notes on close: {e}");
        }
    }
}

fn parse_notes(content: &str) -> Vec<Note> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(Note::parse_line)
        .filter(|note| !note.text.trim().is_empty())
        .collect()
}
