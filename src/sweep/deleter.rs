//! # Deletion Backends
//!
//! This module defines the [`Deleter`] trait, the substitution point for how
//! files are removed, along with its implementations. [`clear_dir`] is
//! polymorphic over this trait: production callers pass [`OsDeleter`] while
//! tests pass [`RecordingDeleter`] to verify which paths a clear operation
//! attempted to delete without depending on real filesystem mutation.
//!
//! [`clear_dir`]: crate::sweep::clear_dir

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use indicatif::ProgressBar;

/// The capability to delete a file at a path.
///
/// Implementations either perform a real OS-level removal or simulate one.
pub trait Deleter {
    /// Deletes (or simulates deleting) the file at `path`.
    ///
    /// # Arguments
    ///
    /// - `path` - The full path of the file to delete.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` on success and the underlying I/O error on failure.
    fn delete(&self, path: &Path) -> io::Result<()>;
}

/// The real deletion backend: removes the file from the filesystem.
///
/// Fails if `path` does not refer to an existing file.
pub struct OsDeleter;

impl Deleter for OsDeleter {
    fn delete(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// A deletion backend that records instead of deleting.
///
/// Each call appends the given path as one newline-terminated line to a
/// manifest file, in call order. No filesystem entry is ever removed. The
/// manifest should live outside the tree being cleared so the traversal
/// does not observe it.
pub struct RecordingDeleter {
    manifest: PathBuf,
}

impl RecordingDeleter {
    /// Creates a recording backend that appends to the given manifest file.
    ///
    /// The manifest file is created on the first call to `delete`.
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }

    /// The path of the manifest file this backend appends to.
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }
}

impl Deleter for RecordingDeleter {
    fn delete(&self, path: &Path) -> io::Result<()> {
        let mut manifest = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.manifest)?;
        writeln!(manifest, "{}", path.display())
    }
}

/// A deletion backend that ticks a progress bar around an inner backend.
///
/// Used by the CLI to report how far a clear operation has progressed.
pub struct ProgressDeleter<D: Deleter> {
    inner: D,
    progress_bar: ProgressBar,
}

impl<D: Deleter> ProgressDeleter<D> {
    /// Wraps `inner` so that every successful deletion increments
    /// `progress_bar` by one.
    pub fn new(inner: D, progress_bar: ProgressBar) -> Self {
        Self {
            inner,
            progress_bar,
        }
    }
}

impl<D: Deleter> Deleter for ProgressDeleter<D> {
    fn delete(&self, path: &Path) -> io::Result<()> {
        self.inner.delete(path)?;
        self.progress_bar.inc(1);
        Ok(())
    }
}
