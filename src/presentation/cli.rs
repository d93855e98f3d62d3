//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Flags override `HERALD_*` environment variables, which override config files

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Herald - notify watchers when annotated declarations change
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events, JSON listings)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file, layered over the user and project config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two revisions of a git repository and notify watchers
    Run {
        /// Path inside the repository
        #[arg(long, default_value = ".")]
        repo: PathBuf,

        /// Older revision (default: HEAD~1)
        #[arg(long)]
        base: Option<String>,

        /// Newer revision (default: HEAD)
        #[arg(long)]
        head: Option<String>,

        /// Notifiers to use (comma separated)
        #[arg(long = "notifier", value_delimiter = ',')]
        notifiers: Vec<String>,
    },

    /// Compare two files or two directory trees
    Diff {
        /// Previous file or directory
        previous: PathBuf,

        /// Current file or directory
        current: PathBuf,

        /// Notifiers to use (comma separated)
        #[arg(long = "notifier", value_delimiter = ',')]
        notifiers: Vec<String>,
    },

    /// List the annotated regions of one file
    Parse {
        /// Java source file
        file: PathBuf,
    },

    /// Show the effective marker and the available notifiers and walkers
    Verify,
}
