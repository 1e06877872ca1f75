//! # Error Types
//!
//! This module defines the custom error type returned by the [`sweep`] module.
//!
//! [`sweep`]: crate::sweep

use std::{io, path::PathBuf};

use thiserror;

/// Errors that occur while clearing a directory of its files.
#[derive(thiserror::Error, Debug)]
pub enum ClearError {
    /// The input path does not exist on the filesystem.
    #[error("'{path}' does not exist")]
    NotFound {
        /// The path that could not be found.
        path: PathBuf,
    },

    /// The input path exists but does not refer to a directory.
    #[error("'{path}' is not a directory")]
    NotADirectory {
        /// The offending non-directory path.
        path: PathBuf,
    },

    /// Failed to read an entry while walking the directory tree.
    #[error("Failed to walk '{path}': {error}")]
    Walk {
        /// The root of the walk that failed.
        path: PathBuf,
        /// The underlying traversal error.
        #[source]
        error: walkdir::Error,
    },

    /// The deletion backend failed for one file. The traversal is aborted
    /// as soon as this occurs; files already processed stay deleted.
    #[error("Failed to delete '{path}': {error}")]
    Delete {
        /// The file that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },
}
