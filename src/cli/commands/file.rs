//! File command implementation.
//!
//! The `resdir file <NAME>` command prints the path of a file inside the
//! resolved Resources directory.

use std::sync::Arc;

use crate::cli::args::FileArgs;
use crate::cli::output::Output;
use crate::error::{ResdirError, Result};
use crate::fs;
use crate::resolver::ResourceDir;

use super::dispatcher::{Command, CommandResult};

/// The file command implementation.
pub struct FileCommand {
    dir: Arc<ResourceDir>,
    args: FileArgs,
}

impl FileCommand {
    /// Create a new file command.
    pub fn new(dir: Arc<ResourceDir>, args: FileArgs) -> Self {
        Self { dir, args }
    }
}

impl Command for FileCommand {
    async fn execute(&self, out: &Output) -> Result<CommandResult> {
        let path = self.dir.file_path(&self.args.name).await;
        out.payload(&path.display().to_string());

        if self.args.check && !fs::path_exists(&path).await {
            return Err(ResdirError::Missing { path });
        }

        Ok(CommandResult::success())
    }
}
