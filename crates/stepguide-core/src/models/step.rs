//! Step model definition and related functionality.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// File extensions recognized as step images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Represents one assembly step discovered in the resources directory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Step {
    /// Position of the step in the ordered sequence (0-indexed)
    pub index: usize,

    /// Path to the step image
    pub image_path: PathBuf,

    /// Path where the optional description text is expected
    pub description_path: PathBuf,
}

impl Step {
    /// Builds a step for `image_path`, deriving the description path from the
    /// image's base name.
    ///
    /// Only the last extension is replaced, so `a.b.png` pairs with `a.b.txt`.
    pub fn from_image(index: usize, image_path: PathBuf) -> Self {
        let description_path = image_path.with_extension("txt");
        Self {
            index,
            image_path,
            description_path,
        }
    }

    /// The 1-based number shown to users.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// File name of the image, lossily converted for display.
    pub fn image_name(&self) -> String {
        self.image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether a description file currently exists next to the image.
    pub fn has_description(&self) -> bool {
        self.description_path.is_file()
    }
}

/// Machine-readable listing entry for a step.
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary<'a> {
    #[serde(flatten)]
    pub step: &'a Step,
    /// 1-based step number
    pub number: usize,
    pub has_description: bool,
}

impl<'a> From<&'a Step> for StepSummary<'a> {
    fn from(step: &'a Step) -> Self {
        Self {
            step,
            number: step.number(),
            has_description: step.has_description(),
        }
    }
}

/// Returns true when `path` has one of the [`IMAGE_EXTENSIONS`].
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
