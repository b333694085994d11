//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "detag")]
#[command(about = "Strip hashtags from notes while keeping code blocks intact", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print text with hashtags removed (reads stdin when no file is given)
    Strip {
        /// Input file
        file: Option<PathBuf>,
    },

    /// List hashtags that would be removed (reads stdin when no file is given)
    Tags {
        /// Input file
        file: Option<PathBuf>,
    },

    /// Clear hashtags from notes in place
    Clear {
        /// Note ids, relative to the store root (e.g., inbox/today.md)
        #[arg(value_name = "NOTE_ID")]
        notes: Vec<String>,

        /// Clear every note in the store
        #[arg(short, long, conflicts_with = "notes")]
        all: bool,

        /// Include notes in subdirectories (with --all)
        #[arg(short, long, requires = "all")]
        recursive: bool,

        /// Store root (default: DETAG_ROOT or current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Notification language (en, zh)
        #[arg(long)]
        locale: Option<String>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
}
