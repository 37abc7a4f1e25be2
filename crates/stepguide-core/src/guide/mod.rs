//! Entry point tying a resources directory to its steps and notes.
//!
//! A [`Guide`] only holds the configured resources directory. Step discovery
//! and notes loading happen on demand, so every call sees the files as they
//! are on disk right now.

pub mod builder;

use std::path::{Path, PathBuf};

pub use builder::GuideBuilder;

use crate::{collection::StepCollection, notes::NotesStore};

/// Access to the steps and notes stored under one resources directory.
#[derive(Debug, Clone)]
pub struct Guide {
    resources_dir: PathBuf,
}

impl Guide {
    fn new(resources_dir: PathBuf) -> Self {
        Self { resources_dir }
    }

    /// The directory holding images, descriptions and notes files.
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Runs a fresh discovery pass over the resources directory.
    pub fn steps(&self) -> StepCollection {
        StepCollection::discover(&self.resources_dir)
    }

    /// Opens the notes of the step at `step_index`.
    pub fn notes(&self, step_index: usize) -> NotesStore {
        NotesStore::open(&self.resources_dir, step_index)
    }
}
