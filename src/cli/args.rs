//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// resdir - Resources directory resolution across environments.
#[derive(Debug, Parser)]
#[command(name = "resdir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for the build-output convention (overrides the
    /// executable's directory)
    #[arg(short, long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve and print the Resources directory (default if no command specified)
    Resolve(ResolveArgs),

    /// Trace every probe step and show why each matched, missed, or was skipped
    Explain(ExplainArgs),

    /// Print the path of a file inside the Resources directory
    File(FileArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail if the resolved directory does not exist
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the `explain` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExplainArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `file` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FileArgs {
    /// File name to join onto the resolved directory
    pub name: String,

    /// Fail if the resource file does not exist
    #[arg(long)]
    pub check: bool,
}
