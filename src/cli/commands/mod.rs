//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations over one shared resolver instance,
//! so `resolve` and `file` observe the same cached resolution.

pub mod dispatcher;
pub mod explain;
pub mod file;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
