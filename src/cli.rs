//! # CLI
//!
//! This module defines the data structures used to parse command line
//! arguments when running the program.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// This struct represents the top-level CLI entry point for the tool.
#[derive(Parser)]
#[command(about = "Clears a directory of files, preserving its subdirectories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// This struct represents the different commands available.
#[derive(Subcommand)]
pub enum Commands {
    /// Deletes every file under a directory, leaving the directories intact.
    Clear {
        /// The directory to clear.
        #[arg()]
        directory: PathBuf,

        /// Record the paths that would be deleted to this manifest file,
        /// one per line, instead of deleting them.
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
}
