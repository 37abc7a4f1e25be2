//! Core library for the step guide assembly instruction viewer.
//!
//! This crate holds everything except the presentation layer: discovering the
//! ordered steps in a resources directory, moving through them, resolving
//! step descriptions, and keeping per-step notes on disk.
//!
//! # Resources Layout
//!
//! ```text
//! resources/
//! ├── 01-frame.png          step image (png, jpg, jpeg, bmp)
//! ├── 01-frame.txt          optional description of that step
//! ├── 02-legs.jpg
//! └── notes_step1.txt       notes of step 1, one "[dd.MM.yyyy hh:mm] text" per line
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stepguide_core::GuideBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let guide = GuideBuilder::new()
//!     .with_resources_dir(Some("resources"))
//!     .build()?;
//!
//! let mut steps = guide.steps();
//! steps.advance();
//! if let Some(step) = steps.current() {
//!     println!("{}", steps.describe(step));
//!
//!     let mut notes = guide.notes(step.index);
//!     notes.add("The hinge screws are too short")?;
//!     notes.close()?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod display;
pub mod error;
pub mod guide;
pub mod handlers;
pub mod models;
pub mod notes;
pub mod params;

// Re-export commonly used types
pub use collection::{Description, StepCollection};
pub use display::{NoteChange, Notes, OperationStatus, StepList, StepView, WelcomeView};
pub use error::{GuideError, Result};
pub use guide::{Guide, GuideBuilder};
pub use models::{navigation_state, NavigationState, Note, Position, Step, StepSummary};
pub use notes::NotesStore;
pub use params::{AddNote, DeleteNote, EditNote, ImportNotes, StepRef};
