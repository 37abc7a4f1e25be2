//! Data models for assembly steps and their notes.
//!
//! This module contains the domain models of the step guide. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay separate from presentation logic.
//!
//! ## Models
//!
//! - [`Step`]: one discovered image plus the derived description path
//! - [`Note`]: a timestamped free-text annotation, one per line on disk
//! - [`Position`] and [`NavigationState`]: where the viewer currently is and
//!   which way it can move
//!
//! # Examples
//!
//! ```rust
//! use std::path::PathBuf;
//!
//! use stepguide_core::models::{navigation_state, Position, Step};
//!
//! let step = Step::from_image(0, PathBuf::from("resources/01-frame.png"));
//! assert_eq!(step.number(), 1);
//! assert_eq!(step.description_path, PathBuf::from("resources/01-frame.txt"));
//!
//! let nav = navigation_state(Position::Welcome, 3);
//! assert!(!nav.can_go_back);
//! assert!(nav.can_go_forward);
//! ```

pub mod navigation;
pub mod note;
pub mod step;


pub use navigation::{navigation_state, NavigationState, Position};
pub use note::{normalize_text, Note, TIMESTAMP_FORMAT};
pub use step::{is_image_file, Step, StepSummary, IMAGE_EXTENSIONS};
