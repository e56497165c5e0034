//! Working directory layout and build directory lifecycle

use crate::io::configuration::{
    BUILD_DIR_NAME, CONFIG_FILE_NAME, EDITION_EXTENSION, LAYERS_DIR_NAME, METADATA_FILE_NAME,
};
use crate::io::error::{Result, WithPath};
use std::path::{Path, PathBuf};

/// Input and output locations derived from one working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    layers_dir: PathBuf,
    build_dir: PathBuf,
}

impl Workspace {
    /// Lay out the workspace under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            layers_dir: root.join(LAYERS_DIR_NAME),
            build_dir: root.join(BUILD_DIR_NAME),
            root,
        }
    }

    /// Resolve the working directory
    ///
    /// An explicit directory wins, then the `PWD` environment variable, then
    /// the process current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither an explicit directory nor `PWD` is
    /// available and the current directory cannot be determined
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(dir) = explicit {
            return Ok(Self::new(dir));
        }

        match std::env::var_os("PWD") {
            Some(pwd) if !pwd.is_empty() => Ok(Self::new(PathBuf::from(pwd))),
            _ => {
                let cwd =
                    std::env::current_dir().with_path(Path::new("."), "resolve current dir")?;
                Ok(Self::new(cwd))
            }
        }
    }

    /// The working directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one subdirectory per layer
    pub fn layers_dir(&self) -> &Path {
        &self.layers_dir
    }

    /// Directory receiving editions and metadata
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Default configuration file location
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Metadata document location
    pub fn metadata_path(&self) -> PathBuf {
        self.build_dir.join(METADATA_FILE_NAME)
    }

    /// Output image location for an edition
    pub fn edition_path(&self, edition: u32) -> PathBuf {
        self.build_dir.join(format!("{edition}.{EDITION_EXTENSION}"))
    }

    /// Remove and recreate the build directory
    ///
    /// A failed removal is logged and treated as the directory not existing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn prepare_build_dir(&self) -> Result<()> {
        match std::fs::remove_dir_all(&self.build_dir) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.build_dir.display(), "no previous build directory");
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.build_dir.display(),
                    error = %err,
                    "can't delete build directory, assuming it doesn't exist"
                );
            }
        }

        std::fs::create_dir_all(&self.build_dir)
            .with_path(&self.build_dir, "create build directory")
    }
}
