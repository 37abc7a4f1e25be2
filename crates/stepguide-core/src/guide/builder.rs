//! Builder for creating and configuring Guide instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Guide;
use crate::error::{GuideError, Result};

/// Builder for creating and configuring Guide instances.
#[derive(Debug, Clone, Default)]
pub struct GuideBuilder {
    resources_dir: Option<PathBuf>,
}

impl GuideBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom resources directory.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stepguide/resources` or
    /// `~/.local/share/stepguide/resources`.
    pub fn with_resources_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.resources_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured guide.
    ///
    /// An explicit directory is used as given, even if it does not exist yet.
    /// The default XDG directory is created.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::XdgDirectory` if the default directory cannot be
    /// resolved or created.
    pub fn build(self) -> Result<Guide> {
        let resources_dir = match self.resources_dir {
            Some(path) => path,
            None => Self::default_resources_dir()?,
        };
        debug!("Using resources directory {}", resources_dir.display());
        Ok(Guide::new(resources_dir))
    }

    /// Returns the default resources directory following the XDG Base
    /// Directory specification.
    fn default_resources_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stepguide")
            .create_data_directory("resources")
            .map_err(|e| GuideError::XdgDirectory(e.to_string()))
    }
}
