//! # Sweep
//!
//! This module implements the core clearing operation: validate a path, walk
//! the directory tree, and delete every regular file through a substitutable
//! deletion backend, leaving every directory intact.

mod clearer;
mod deleter;
pub mod errors;

pub use clearer::{clear_dir, count_files};
pub use deleter::{Deleter, OsDeleter, ProgressDeleter, RecordingDeleter};
