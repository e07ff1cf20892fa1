//! Resolve command implementation.
//!
//! The `resdir resolve` command prints the resolved Resources directory.

use std::sync::Arc;

use crate::cli::args::ResolveArgs;
use crate::cli::output::Output;
use crate::error::{ResdirError, Result};
use crate::resolver::ResourceDir;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    dir: Arc<ResourceDir>,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(dir: Arc<ResourceDir>, args: ResolveArgs) -> Self {
        Self { dir, args }
    }
}

impl Command for ResolveCommand {
    async fn execute(&self, out: &Output) -> Result<CommandResult> {
        let resolution = self.dir.resolution().await;

        if self.args.json {
            let json = serde_json::to_string_pretty(resolution)
                .map_err(|e| ResdirError::Other(e.into()))?;
            out.payload(&json);
        } else {
            out.payload(&resolution.path.display().to_string());
            if resolution.exists {
                out.detail(
                    &out.theme()
                        .format_matched(&format!("resolved via {}", resolution.step)),
                );
            } else {
                out.detail(&out.theme().format_fallback(&format!(
                    "resolved via {}; the directory does not exist",
                    resolution.step
                )));
            }
        }

        if self.args.check && !resolution.exists {
            return Err(ResdirError::Missing {
                path: resolution.path.clone(),
            });
        }

        Ok(CommandResult::success())
    }
}
