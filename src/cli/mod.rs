//! Command-line interface for resdir.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`output`] - Terminal output routing
//! - [`theme`] - Visual styling

pub mod args;
pub mod commands;
pub mod output;
pub mod theme;

pub use args::{Cli, Commands, ExplainArgs, FileArgs, ResolveArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use output::Output;
pub use theme::Theme;
