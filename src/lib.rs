//! # Recursive directory clearer
//!
//! Deletes every regular file in a directory tree while preserving the
//! subdirectory structure. The deletion backend is a substitution point:
//! the real backend removes files from the filesystem, while a recording
//! backend appends each path to a manifest for verification in tests.

mod cli;
pub mod fixture;
pub mod sweep;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{Cli, Commands};
use crate::sweep::{OsDeleter, ProgressDeleter, RecordingDeleter};

/// Clears the directory given on the command line.
///
/// With `--manifest`, the paths that would be deleted are appended to the
/// manifest file instead and nothing is removed. Otherwise files are
/// deleted for real, with a progress bar tracking the number of files
/// processed.
pub fn run() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Clear {
            directory,
            manifest: Some(manifest),
        } => {
            let deleter = RecordingDeleter::new(manifest);
            sweep::clear_dir(&directory, &deleter).expect("Failed to record directory contents");
        }
        Commands::Clear {
            directory,
            manifest: None,
        } => {
            let total = sweep::count_files(&directory).expect("Failed to read directory");

            let progress_bar = ProgressBar::new(total);
            progress_bar.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40.white/white} {pos}/{len} {msg}")
                    .expect("Failed to create progress bar")
                    .progress_chars("##-"),
            );
            progress_bar.set_message("Deleting files...");

            let deleter = ProgressDeleter::new(OsDeleter, progress_bar.clone());
            sweep::clear_dir(&directory, &deleter).expect("Failed to clear directory");
            progress_bar.finish_with_message("Cleared directory!");
        }
    }
}
