//! Step discovery and navigation.
//!
//! A [`StepCollection`] is built once from a resources directory and is only
//! mutated afterwards by moving the current position.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    error::{GuideError, IoResultExt, Result},
    models::{is_image_file, navigation_state, NavigationState, Position, Step},
};

/// Resolved description text of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// Trimmed contents of the description file
    Text(String),
    /// No readable description file exists for this 1-based step number
    Placeholder { number: usize },
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Text(text) => write!(f, "{text}"),
            Description::Placeholder { number } => {
                write!(f, "Description for step {number}\n(file not found)")
            }
        }
    }
}

/// The ordered set of steps found in a resources directory plus the viewer's
/// current position within it.
#[derive(Debug, Clone)]
pub struct StepCollection {
    root: PathBuf,
    steps: Vec<Step>,
    position: Position,
}

impl StepCollection {
    /// Scans `root` for step images and starts on the welcome screen.
    ///
    /// Images are matched by extension (see
    /// [`IMAGE_EXTENSIONS`](crate::models::IMAGE_EXTENSIONS)) and ordered by
    /// file name. A missing or unreadable directory yields an empty
    /// collection; discovery never fails.
    pub fn discover(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let mut images = match fs::read_dir(&root) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.is_file() && is_image_file(path))
                .collect::<Vec<_>>(),
            Err(e) => {
                warn!("Cannot read resources directory {}: {e}", root.display());
                Vec::new()
            }
        };
        images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let steps = images
            .into_iter()
            .enumerate()
            .map(|(index, path)| Step::from_image(index, path))
            .collect::<Vec<_>>();
        debug!("Discovered {} steps in {}", steps.len(), root.display());

        Self {
            root,
            steps,
            position: Position::Welcome,
        }
    }

    /// The directory the steps were discovered in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All steps in display order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of discovered steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether discovery found no steps at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The current position, welcome sentinel included.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The current step, or `None` on the welcome screen.
    pub fn current(&self) -> Option<&Step> {
        self.position.index().and_then(|index| self.steps.get(index))
    }

    /// Moves one step forward and returns the new position.
    ///
    /// From the welcome screen this selects the first step. At the last step,
    /// or with no steps at all, the position is unchanged.
    pub fn advance(&mut self) -> Position {
        self.position = match self.position {
            Position::Welcome if !self.steps.is_empty() => Position::Step(0),
            Position::Step(index) if index + 1 < self.steps.len() => Position::Step(index + 1),
            unchanged => unchanged,
        };
        self.position
    }

    /// Moves one step back and returns the new position.
    ///
    /// From the first step this returns to the welcome screen, where further
    /// calls have no effect.
    pub fn retreat(&mut self) -> Position {
        self.position = match self.position {
            Position::Step(0) | Position::Welcome => Position::Welcome,
            Position::Step(index) => Position::Step(index - 1),
        };
        self.position
    }

    /// Jumps directly to the step at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidStep`] if `index` is out of range; the
    /// position is left unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<Position> {
        if index >= self.steps.len() {
            return Err(GuideError::InvalidStep {
                number: index + 1,
                count: self.steps.len(),
            });
        }
        self.position = Position::Step(index);
        Ok(self.position)
    }

    /// Returns to the welcome screen.
    pub fn reset(&mut self) -> Position {
        self.position = Position::Welcome;
        self.position
    }

    /// Navigation availability for the current position.
    pub fn navigation(&self) -> NavigationState {
        navigation_state(self.position, self.steps.len())
    }

    /// Resolves the description text for `step`.
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily. A missing or
    /// unreadable description file resolves to [`Description::Placeholder`].
    pub fn describe(&self, step: &Step) -> Description {
        match fs::read(&step.description_path) {
            Ok(bytes) => Description::Text(String::from_utf8_lossy(&bytes).trim().to_string()),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Cannot read description {}: {e}",
                        step.description_path.display()
                    );
                }
                Description::Placeholder {
                    number: step.number(),
                }
            }
        }
    }

    /// Reads the image bytes of `step` for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::ResourceUnavailable`] if the image was removed
    /// or cannot be read since discovery.
    pub fn load_image(&self, step: &Step) -> Result<Vec<u8>> {
        fs::read(&step.image_path).resource_context(&step.image_path)
    }
}
