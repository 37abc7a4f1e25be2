use std::{fs, path::Path};

use stepguide_core::{Guide, GuideBuilder};
use tempfile::TempDir;

/// Helper function to create a guide over an empty temporary resources
/// directory
pub fn create_test_guide() -> (TempDir, Guide) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let guide = GuideBuilder::new()
        .with_resources_dir(Some(temp_dir.path()))
        .build()
        .expect("Failed to create guide");
    (temp_dir, guide)
}

/// Writes a placeholder image file; content is never decoded.
pub fn write_image(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"\x89PNG fake image").expect("Failed to write image");
}

/// Writes a text file such as a step description.
pub fn write_text(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write text file");
}
