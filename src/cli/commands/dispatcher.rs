//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::sync::Arc;

use crate::cli::args::{Cli, Commands, ResolveArgs};
use crate::cli::output::Output;
use crate::error::Result;
use crate::resolver::ResourceDir;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution
/// logic. Commands are awaited directly through the dispatcher, never
/// through `dyn`, so async methods are fine here.
#[allow(async_fn_in_trait)]
pub trait Command {
    /// Execute the command, writing through `out`.
    async fn execute(&self, out: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    dir: Arc<ResourceDir>,
}

impl CommandDispatcher {
    /// Create a new dispatcher around the resolver instance.
    pub fn new(dir: Arc<ResourceDir>) -> Self {
        Self { dir }
    }

    /// The resolver shared by all commands.
    pub fn resource_dir(&self) -> &ResourceDir {
        &self.dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. A bare invocation runs `resolve` with defaults.
    pub async fn dispatch(&self, cli: &Cli, out: &Output) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(self.dir.clone(), args.clone());
                cmd.execute(out).await
            }
            Some(Commands::Explain(args)) => {
                let cmd = super::explain::ExplainCommand::new(self.dir.clone(), args.clone());
                cmd.execute(out).await
            }
            Some(Commands::File(args)) => {
                let cmd = super::file::FileCommand::new(self.dir.clone(), args.clone());
                cmd.execute(out).await
            }
            None => {
                let cmd =
                    super::resolve::ResolveCommand::new(self.dir.clone(), ResolveArgs::default());
                cmd.execute(out).await
            }
        }
    }
}
