//! Display formatting for steps, notes and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly; the wrapper types
//! here format them in a particular context (a full step view, a numbered
//! note list, the outcome of a note edit). Everything is emitted as markdown
//! so the CLI renderer can style it or print it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views, Lists &  │    │   Formatted     │
//! │  (Step, Note)   │───▶│  Result Types   │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: list wrappers ([`Notes`], [`StepList`])
//! - [`results`]: note mutation outcomes ([`NoteChange`])
//! - [`status`]: one-line confirmations and errors ([`OperationStatus`])
//! - [`views`]: the step and welcome screens ([`StepView`], [`WelcomeView`])
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use std::path::PathBuf;
//!
//! use stepguide_core::{
//!     display::StepView,
//!     models::{navigation_state, Position, Step},
//!     Description,
//! };
//!
//! let step = Step::from_image(0, PathBuf::from("resources/01.png"));
//! let view = StepView {
//!     step: &step,
//!     description: &Description::Placeholder { number: 1 },
//!     total: 3,
//!     navigation: navigation_state(Position::Step(0), 3),
//! };
//! let output = view.to_string();
//! assert!(output.contains("# Step 1 of 3"));
//! assert!(output.contains("Description for step 1"));
//! ```

use serde::Serialize;

use crate::error::Result;

pub mod collections;
pub mod models;
pub mod results;
pub mod status;
pub mod views;

pub use collections::{Notes, StepList};
pub use results::{NoteChange, NoteChangeKind};
pub use status::OperationStatus;
pub use views::{StepView, WelcomeView};

/// Serializes `value` as pretty-printed JSON for machine-readable output.
///
/// # Errors
///
/// Returns [`GuideError::Serialization`](crate::GuideError::Serialization) if
/// the value cannot be represented as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
