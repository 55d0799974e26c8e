//! Directory existence checks
//!
//! Resolution only needs to know whether a path names a directory.
//! [`HostFs`] asks the real filesystem; [`KnownDirs`] answers from a fixed
//! set so callers can simulate present and missing directories.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

/// Answers whether a path names an existing directory
#[allow(clippy::missing_errors_doc)]
pub trait DirProbe {
    /// Returns `Ok(true)` for a directory, `Ok(false)` when nothing exists at
    /// `path`, and an error when the path exists but is not a directory or
    /// cannot be inspected.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;
}

/// Probe backed by `std::fs` metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl DirProbe for HostFs {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(true),
            Ok(_) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            )),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }
}

/// In-memory probe that knows a fixed set of directories
#[derive(Debug, Clone, Default)]
pub struct KnownDirs {
    dirs: HashSet<PathBuf>,
}

impl KnownDirs {
    /// Creates a probe with no directories
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory
    #[must_use]
    pub fn with(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.insert(dir.into());
        self
    }
}

impl DirProbe for KnownDirs {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(self.dirs.contains(path))
    }
}
